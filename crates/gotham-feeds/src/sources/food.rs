//! Nutrition lookups from Open Food Facts

use super::http::{get_json, join};
use crate::FeedError;
use gotham_domain::FoodItem;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    brands: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Debug, Default, Deserialize)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g", default, deserialize_with = "lenient_number")]
    energy_kcal: Option<f64>,
    #[serde(rename = "proteins_100g", default, deserialize_with = "lenient_number")]
    proteins: Option<f64>,
    #[serde(rename = "carbohydrates_100g", default, deserialize_with = "lenient_number")]
    carbohydrates: Option<f64>,
    #[serde(rename = "fat_100g", default, deserialize_with = "lenient_number")]
    fat: Option<f64>,
}

// Open Food Facts sends numbers, numeric strings or junk; junk becomes `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

impl Product {
    // Unnamed products are skipped.
    fn into_item(self) -> Option<FoodItem> {
        let name = self.product_name.filter(|n| !n.trim().is_empty())?;
        Some(FoodItem {
            name,
            brand: self.brands.filter(|b| !b.trim().is_empty()),
            energy_kcal: self.nutriments.energy_kcal,
            protein_g: self.nutriments.proteins,
            carbs_g: self.nutriments.carbohydrates,
            fat_g: self.nutriments.fat,
        })
    }
}

/// On-demand nutrition search
#[derive(Clone)]
pub struct FoodClient {
    client: reqwest::Client,
    base_url: String,
    page_size: usize,
}

impl FoodClient {
    /// Create a client returning up to `page_size` products per search
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, page_size: usize) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            page_size,
        }
    }

    /// Search products by name
    pub async fn search(&self, query: &str) -> Result<Vec<FoodItem>, FeedError> {
        let page_size = self.page_size.to_string();
        let request = self
            .client
            .get(join(&self.base_url, "cgi/search.pl"))
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("json", "1"),
                ("page_size", page_size.as_str()),
            ]);

        let page: SearchPage = get_json(request).await?;
        Ok(page
            .products
            .into_iter()
            .filter_map(Product::into_item)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_reads_nutriments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cgi/search.pl"))
            .and(query_param("search_terms", "oats"))
            .and(query_param("json", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "products": [
                    {
                        "product_name": "Rolled Oats",
                        "brands": "Wayne Farms",
                        "nutriments": {
                            "energy-kcal_100g": 379.0,
                            "proteins_100g": 13.2,
                            "carbohydrates_100g": 67.7,
                            "fat_100g": 6.5
                        }
                    },
                    {"product_name": "", "nutriments": {}},
                    {"product_name": "Oat Bar", "brands": ""}
                ]
            })))
            .mount(&server)
            .await;

        let items = FoodClient::new(reqwest::Client::new(), server.uri(), 5)
            .search("oats")
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].brand.as_deref(), Some("Wayne Farms"));
        assert_eq!(items[0].energy_kcal, Some(379.0));
        assert_eq!(items[1].name, "Oat Bar");
        assert_eq!(items[1].brand, None);
        assert_eq!(items[1].fat_g, None);
    }

    #[tokio::test]
    async fn test_search_tolerates_mixed_nutriment_types() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cgi/search.pl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "products": [
                    {
                        "product_name": "Apple Slices",
                        "nutriments": {
                            "energy-kcal_100g": "52",
                            "proteins_100g": "n/a",
                            "carbohydrates_100g": [14],
                            "fat_100g": null
                        }
                    },
                    {
                        "product_name": "Rolled Oats",
                        "nutriments": {"energy-kcal_100g": 379, "fat_100g": 6.5}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let items = FoodClient::new(reqwest::Client::new(), server.uri(), 5)
            .search("apple")
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].energy_kcal, Some(52.0));
        assert_eq!(items[0].protein_g, None);
        assert_eq!(items[0].carbs_g, None);
        assert_eq!(items[0].fat_g, None);
        assert_eq!(items[1].name, "Rolled Oats");
        assert_eq!(items[1].energy_kcal, Some(379.0));
    }
}
