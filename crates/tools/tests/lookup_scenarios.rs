//! End-to-end lookups through the tool registry

use retiree_resources_config::ToolsConfig;
use retiree_resources_core::TopicSource;
use retiree_resources_tools::{
    create_default_registry, evaluate, medicaid_store, medicare_store, EligibilityClassification,
    EligibilityInput, ErrorCode, ToolExecutor, ToolRegistry,
};
use serde_json::{json, Value};

fn registry() -> ToolRegistry {
    create_default_registry(&ToolsConfig::default()).expect("registry")
}

async fn call(registry: &ToolRegistry, tool: &str, args: Value) -> String {
    let output = registry.execute(tool, args).await.expect("tool call");
    assert!(!output.is_error);
    output.as_text()
}

#[tokio::test]
async fn exact_keys_return_stored_text() {
    let registry = registry();
    for (tool, store) in [
        ("get_medicare_info", medicare_store()),
        ("get_medicaid_info", medicaid_store()),
    ] {
        for key in store.keys() {
            let text = call(&registry, tool, json!({ "topic": key })).await;
            assert_eq!(text, store.get(key).unwrap(), "{} / {}", tool, key);
        }
    }
}

#[tokio::test]
async fn lookups_are_case_insensitive() {
    let registry = registry();
    let upper = call(&registry, "get_medicare_info", json!({ "topic": "PART A" })).await;
    let lower = call(&registry, "get_medicare_info", json!({ "topic": "part a" })).await;
    assert_eq!(upper, lower);
}

#[tokio::test]
async fn part_b_scenario() {
    let text = call(&registry(), "get_medicare_info", json!({ "topic": "Part B" })).await;
    assert!(text.starts_with("Medicare Part B (Medical Insurance):"));
    assert!(text.contains("Annual deductible: $240"));
}

#[tokio::test]
async fn substrings_resolve_to_their_key() {
    let registry = registry();
    let store = medicaid_store();
    for (input, key) in [
        ("waiver", "waiver programs"),
        ("tell me about nursing home costs", "nursing home"),
        ("asset", "asset limits"),
    ] {
        let text = call(&registry, "get_medicaid_info", json!({ "topic": input })).await;
        assert_eq!(text, store.get(key).unwrap(), "{}", input);
    }
}

#[tokio::test]
async fn unmatched_topic_lists_every_key() {
    let text = call(&registry(), "get_medicare_info", json!({ "topic": "dental" })).await;
    assert!(text.starts_with("Information about 'dental' not found"));
    for key in medicare_store().keys() {
        assert!(text.contains(key), "missing {}", key);
    }
}

#[test]
fn eligibility_scenarios() {
    let check = |monthly_income: f64, assets: f64, age: i64, needs_long_term_care: bool| {
        evaluate(&EligibilityInput {
            monthly_income,
            assets,
            age,
            needs_long_term_care,
        })
        .classification
    };

    assert_eq!(check(1215.0, 2000.0, 70, false), EligibilityClassification::Eligible);
    assert_eq!(check(1300.0, 1500.0, 70, false), EligibilityClassification::IncomeExceeds);
    assert_eq!(check(0.0, 0.0, 64, false), EligibilityClassification::AgeIneligible);
    assert_eq!(check(2829.0, 2000.0, 65, true), EligibilityClassification::Eligible);
    assert_eq!(check(2829.5, 2000.0, 65, true), EligibilityClassification::IncomeExceeds);
}

#[tokio::test]
async fn eligibility_tool_renders_numbers() {
    let text = call(
        &registry(),
        "check_medicaid_eligibility",
        json!({ "monthly_income": 1300, "assets": 1500, "age": 70 }),
    )
    .await;
    assert!(text.contains("Income: $1,300.00/month (Limit: $1,215/month)"));
    assert!(text.contains("Income may exceed limit"));
}

#[tokio::test]
async fn miami_senior_centers() {
    let text = call(
        &registry(),
        "get_local_resource",
        json!({ "city": "Miami", "resource_type": "Senior Center" }),
    )
    .await;
    assert!(text.contains("1. Miami Beach Senior Center: (305) 673-7700"));
    assert!(text.contains("2. Coral Gables Senior Center: (305) 460-5600"));
    assert!(text.contains("3. North Miami Senior Center: (305) 895-9800"));

    let shortcut = call(&registry(), "find_senior_centers", json!({ "city": "Miami" })).await;
    assert_eq!(shortcut, text);
}

#[tokio::test]
async fn unknown_city_names_available_cities() {
    let text = call(
        &registry(),
        "get_local_resource",
        json!({ "city": "Jacksonville", "resource_type": "healthcare" }),
    )
    .await;
    assert!(text.contains("Resources for Jacksonville not found"));
    assert!(text.contains("Available cities: Miami, Orlando, Tampa."));
}

#[tokio::test]
async fn protocol_errors() {
    let registry = registry();

    let err = registry
        .execute("get_weather", json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MethodNotFound);

    let err = registry
        .execute("get_local_resource", json!({ "city": "Miami" }))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidParams);
    assert!(err.message.contains("resource_type"));
}

#[test]
fn tools_listed_in_name_order() {
    let names: Vec<String> = registry().list_tools().into_iter().map(|s| s.name).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), 9);
}
