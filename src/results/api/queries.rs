//! GraphQL query construction for the two supported query shapes.
//!
//! Both shapes take the URL's query identifier as `$slug` and embed one aliased,
//! paginated entrant search per requested player, `entrant_<index>` in the
//! order the players were given.

use super::urls::create_entrant_alias;
use crate::constants::ENTRANTS_PER_PAGE;
use crate::results::models::{EntrantAlias, UrlReference};
use serde::Serialize;

/// Variables sent with every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryVariables {
    pub slug: String,
}

/// A ready-to-send query together with the alias mapping needed to read its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub query: String,
    pub variables: QueryVariables,
    pub aliases: Vec<EntrantAlias>,
}

/// JSON body of a GraphQL POST request.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a QueryVariables,
}

impl QueryPlan {
    pub fn request_body(&self) -> GraphQlRequest<'_> {
        GraphQlRequest {
            query: &self.query,
            variables: &self.variables,
        }
    }
}

/// Encodes a search term as a GraphQL string literal.
/// JSON string escapes are a subset of GraphQL's.
fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn entrant_fields(players: &[String], indent: &str) -> String {
    players
        .iter()
        .enumerate()
        .map(|(index, term)| {
            format!(
                "{indent}{alias}: entrants(query: {{ page: 1, perPage: {ENTRANTS_PER_PAGE}, filter: {{ name: {term} }} }}) {{\n\
                 {indent}  pageInfo {{ totalPages }}\n\
                 {indent}  nodes {{ name standing {{ placement }} }}\n\
                 {indent}}}\n",
                alias = create_entrant_alias(index),
                term = string_literal(term),
            )
        })
        .collect()
}

/// Query for every event of a tournament. `$slug` is the tournament slug.
pub fn tournament_query(players: &[String]) -> String {
    format!(
        "query TournamentEntrants($slug: String) {{\n\
         \x20 tournament(slug: $slug) {{\n\
         \x20   events {{\n\
         \x20     id\n\
         \x20     name\n\
         \x20     slug\n\
         {entrants}\
         \x20   }}\n\
         \x20 }}\n\
         }}\n",
        entrants = entrant_fields(players, "      "),
    )
}

/// Query for a single event. `$slug` is `tournament/<tournament>/event/<event>`.
pub fn event_query(players: &[String]) -> String {
    format!(
        "query EventEntrants($slug: String) {{\n\
         \x20 event(slug: $slug) {{\n\
         \x20   id\n\
         \x20   name\n\
         \x20   slug\n\
         {entrants}\
         \x20 }}\n\
         }}\n",
        entrants = entrant_fields(players, "    "),
    )
}

/// Builds the alias mapping for a list of search terms.
pub fn build_entrant_aliases(players: &[String]) -> Vec<EntrantAlias> {
    players
        .iter()
        .enumerate()
        .map(|(index, term)| EntrantAlias {
            index,
            alias: create_entrant_alias(index),
            search_term: term.clone(),
        })
        .collect()
}

/// Selects the query shape for a resolved URL and parameterizes it with the players.
pub fn build_query(reference: &UrlReference, players: &[String]) -> QueryPlan {
    let query = if reference.is_tournament_wide {
        tournament_query(players)
    } else {
        event_query(players)
    };

    QueryPlan {
        query,
        variables: QueryVariables {
            slug: reference.query_identifier.clone(),
        },
        aliases: build_entrant_aliases(players),
    }
}
