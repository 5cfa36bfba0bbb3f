use mealbot::api::ApiError;
use mealbot::MealDbClient;
use mockito::Matcher;
use serde_json::{Value, json};

fn arrabiata() -> Value {
    json!({
        "idMeal": "52771",
        "strMeal": "Spicy Arrabiata Penne",
        "strDrinkAlternate": null,
        "strCategory": "Vegetarian",
        "strArea": "Italian",
        "strInstructions": "Bring a large pot of water to a boil. Add kosher salt to the boiling water, then add the pasta.",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
        "strTags": "Pasta,Curry",
        "strYoutube": "https://www.youtube.com/watch?v=1IszT_guI08",
        "strIngredient1": "penne rigate",
        "strIngredient2": "olive oil",
        "strIngredient3": "garlic",
        "strIngredient4": "",
        "strMeasure1": "1 pound",
        "strMeasure2": "1/4 cup",
        "strMeasure3": "3 cloves",
        "strMeasure4": "",
        "strIngredient16": null,
        "strMeasure16": null,
        "strSource": null,
        "dateModified": null
    })
}

#[tokio::test]
async fn search_without_matches_returns_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "zzzz".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals":null}"#)
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    let response = client.search("zzzz").await.unwrap();

    assert_eq!(serde_json::to_value(&response).unwrap(), json!({"meals": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn search_projects_to_summary_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Arrabiata Penne".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"meals": [arrabiata()]}).to_string())
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    let response = client.search("Arrabiata Penne").await.unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "meals": [{
                "idMeal": "52771",
                "strMeal": "Spicy Arrabiata Penne",
                "strCategory": "Vegetarian",
                "strArea": "Italian",
                "strYoutube": "https://www.youtube.com/watch?v=1IszT_guI08",
                "strInstructions": "Bring a large pot of water to a boil. Add kosher salt to the boiling water, then add the pasta."
            }]
        })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn raw_search_is_passthrough() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({"meals": [arrabiata()]});
    server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Arrabiata".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    assert_eq!(client.search_raw("Arrabiata").await.unwrap(), body);
}

#[tokio::test]
async fn lookup_fills_all_twenty_slots() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52771".into()))
        .with_status(200)
        .with_body(
            json!({
                "meals": [{
                    "idMeal": "52771",
                    "strMeal": "Spicy Arrabiata Penne",
                    "strCategory": "Vegetarian",
                    "strArea": "Italian",
                    "strInstructions": "Boil the pasta.",
                    "strIngredient1": "Penne Rigate",
                    "strMeasure1": "2 cups"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    let response = client.lookup("52771").await.unwrap();
    assert_eq!(response.meals.len(), 1);

    let meal = serde_json::to_value(&response.meals[0]).unwrap();
    let object = meal.as_object().unwrap();
    let ingredient_keys = object.keys().filter(|k| k.starts_with("strIngredient")).count();
    let measure_keys = object.keys().filter(|k| k.starts_with("strMeasure")).count();

    assert_eq!(ingredient_keys, 20);
    assert_eq!(measure_keys, 20);
    assert_eq!(meal["idMeal"], "52771");
    assert_eq!(meal["strYoutube"], Value::Null);
    assert!(!object.contains_key("strInstructions"));
    assert_eq!(meal["strIngredient1"], "Penne Rigate");
    assert_eq!(meal["strMeasure1"], "2 cups");
    for n in 2..=20 {
        assert_eq!(meal[format!("strIngredient{n}")], Value::Null, "strIngredient{n}");
        assert_eq!(meal[format!("strMeasure{n}")], Value::Null, "strMeasure{n}");
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn lookup_unknown_id_returns_empty_list() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals":null}"#)
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    let response = client.lookup("0").await.unwrap();
    assert_eq!(serde_json::to_value(&response).unwrap(), json!({"meals": []}));
}

#[tokio::test]
async fn categories_are_passthrough() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "categories": [{
            "idCategory": "1",
            "strCategory": "Beef",
            "strCategoryThumb": "https://www.themealdb.com/images/category/beef.png",
            "strCategoryDescription": "Beef is the culinary name for meat from cattle."
        }, {
            "idCategory": "2",
            "strCategory": "Chicken",
            "strCategoryThumb": "https://www.themealdb.com/images/category/chicken.png",
            "strCategoryDescription": "Chicken is a type of domesticated fowl.",
            "unexpected": [1, 2, 3]
        }]
    });
    let mock = server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    assert_eq!(client.categories().await.unwrap(), body);
    mock.assert_async().await;
}

#[tokio::test]
async fn area_filter_is_passthrough() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "meals": [{
            "strMeal": "BeaverTails",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/ryppsv1511815505.jpg",
            "idMeal": "52928"
        }]
    });
    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("a".into(), "Canadian".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    assert_eq!(client.filter_by_area("Canadian").await.unwrap(), body);
    mock.assert_async().await;
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_body(r#"{"categories":[]}"#)
        .create_async()
        .await;

    let client = MealDbClient::new(format!("{}/", server.url()));
    client.categories().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_status_error_propagates() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    let err = client.search("x").await.unwrap_err();
    assert!(matches!(err, ApiError::ApiError { status: 500, ref body } if body == "boom"));
}

#[tokio::test]
async fn malformed_body_propagates() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = MealDbClient::new(server.url());
    let err = client.filter_by_area("x").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn transport_failure_propagates() {
    // Nothing listens on port 9 on a test host.
    let client = MealDbClient::new("http://127.0.0.1:9");
    let err = client.categories().await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkError(_)));
}
