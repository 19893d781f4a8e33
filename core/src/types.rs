//! Domain DTOs for the cocktail search API.
//!
//! # Design
//! Field names follow the API's camel-case JSON (`idDrink`, `strDrink`, ...)
//! through serde renames. Only the four fields the widget renders are kept;
//! the API sends dozens more (ingredients, measures, glass) which serde
//! skips. The mock-server defines its own copy of these types so schema
//! drift shows up in the integration tests.

use serde::{Deserialize, Deserializer, Serialize};

/// One cocktail record returned by `search.php`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Drink {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
    #[serde(rename = "strInstructions", default, deserialize_with = "null_as_empty")]
    pub instructions: String,
}

/// Top-level body of a search response.
///
/// `drinks` is `null` when nothing matched; an absent key is read the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    #[serde(default)]
    pub drinks: Option<Vec<Drink>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
