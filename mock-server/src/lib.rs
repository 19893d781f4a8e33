use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// Path prefix of the public API, key `1` included.
pub const API_PREFIX: &str = "/api/json/v1/1";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Drink {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb")]
    pub thumbnail: String,
    #[serde(rename = "strInstructions")]
    pub instructions: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchBody {
    pub drinks: Option<Vec<Drink>>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub s: Option<String>,
}

pub type Catalog = Arc<Vec<Drink>>;

pub fn app() -> Router {
    app_with(fixtures())
}

/// Serve `search.php` over the given catalog instead of the fixtures.
pub fn app_with(drinks: Vec<Drink>) -> Router {
    let catalog: Catalog = Arc::new(drinks);
    Router::new()
        .route(&format!("{API_PREFIX}/search.php"), get(search))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Case-insensitive substring match on the drink name, in catalog order.
/// Like the real API, "nothing matched" is `{"drinks": null}` with a 200.
async fn search(
    State(catalog): State<Catalog>,
    Query(params): Query<SearchParams>,
) -> Json<SearchBody> {
    let needle = params.s.unwrap_or_default().to_lowercase();
    if needle.is_empty() {
        return Json(SearchBody { drinks: None });
    }
    let hits: Vec<Drink> = catalog
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    debug!(term = %needle, hits = hits.len(), "search");
    Json(SearchBody {
        drinks: if hits.is_empty() { None } else { Some(hits) },
    })
}

fn drink(id: &str, name: &str, instructions: &str) -> Drink {
    Drink {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: format!(
            "https://www.thecocktaildb.com/images/media/drink/{}.jpg",
            name.to_lowercase().replace(' ', "_")
        ),
        instructions: instructions.to_string(),
    }
}

pub fn fixtures() -> Vec<Drink> {
    vec![
        drink(
            "11007",
            "Margarita",
            "Rub the rim of the glass with the lime slice to make the salt stick to it. \
             Take care to moisten only the outer rim and sprinkle the salt on it. The salt \
             should present to the lips of the imbiber and never mix into the cocktail. \
             Shake the other ingredients with ice, then carefully pour into the glass.",
        ),
        drink(
            "11118",
            "Blue Margarita",
            "Rub rim of cocktail glass with lime juice. Dip rim in coarse salt. Shake \
             tequila, blue curacao, and lime juice with ice, strain into the salt-rimmed glass.",
        ),
        drink(
            "11000",
            "Mojito",
            "Muddle mint leaves with sugar and lime juice. Add a splash of soda water and fill \
             the glass with cracked ice. Pour the rum and top with soda water. Garnish and \
             serve with straw.",
        ),
        drink(
            "11001",
            "Old Fashioned",
            "Place sugar cube in old fashioned glass and saturate with bitters, add a dash of \
             plain water. Muddle until dissolved. Fill the glass with ice cubes and add whiskey.",
        ),
        drink("17222", "A1", "Pour all ingredients into a cocktail shaker, mix and serve over ice."),
    ]
}
