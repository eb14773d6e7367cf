mod common;

use anyhow::Result;
use axum::http::StatusCode;
use membership_api::hierarchy::WorkgroupRecord;

#[tokio::test]
async fn tree_returns_nested_forest() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::get(app, "/api/workgroups/tree").await?;

    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    assert_eq!(body["success"], true);
    let roots = &body["data"]["roots"];
    assert_eq!(common::ids(roots), vec![1, 5]);
    assert_eq!(common::ids(&roots[0]["children"]), vec![2, 4]);
    assert_eq!(common::ids(&roots[0]["children"][0]["children"]), vec![3]);
    assert!(body["data"]["breadcrumb"].as_array().map(Vec::is_empty).unwrap_or(false));

    Ok(())
}

#[tokio::test]
async fn tree_includes_breadcrumb_for_selected() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::get(app, "/api/workgroups/tree?selected=3").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::ids(&body["data"]["breadcrumb"]), vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn empty_hierarchy_gives_empty_forest() -> Result<()> {
    let app = common::test_app(Vec::new())?;
    let (status, body) = common::get(app, "/api/workgroups/tree").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["roots"], serde_json::json!([]));

    Ok(())
}

#[tokio::test]
async fn path_returns_breadcrumb() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::get(app, "/api/workgroups/3/path").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::ids(&body["data"]), vec![1, 2, 3]);
    assert_eq!(body["data"][2]["name"], "Audit");
    assert_eq!(body["data"][2]["parent_id"], 2);

    Ok(())
}

#[tokio::test]
async fn path_of_unknown_workgroup_is_empty() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::get(app, "/api/workgroups/42/path").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));

    Ok(())
}

#[tokio::test]
async fn children_lists_direct_children() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::get(app, "/api/workgroups/1/children").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::ids(&body["data"]), vec![2, 4]);

    Ok(())
}

#[tokio::test]
async fn children_of_unknown_workgroup_is_404() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::get(app, "/api/workgroups/42/children").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Workgroup 42 not found");

    Ok(())
}

#[tokio::test]
async fn cyclic_hierarchy_is_a_conflict() -> Result<()> {
    let records = vec![
        WorkgroupRecord::new(1, "A", Some(2)),
        WorkgroupRecord::new(2, "B", Some(1)),
    ];
    let app = common::test_app(records)?;
    let (status, body) = common::get(app, "/api/workgroups/tree").await?;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    Ok(())
}

#[tokio::test]
async fn moving_under_a_descendant_is_rejected() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::send_json(
        app,
        "PUT",
        "/api/workgroups/1",
        r#"{"name": "Board", "parent_id": 3}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["field_errors"]["parent_id"],
        "Cannot move a workgroup under one of its descendants"
    );

    Ok(())
}

#[tokio::test]
async fn workgroup_cannot_be_its_own_parent() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::send_json(
        app,
        "PUT",
        "/api/workgroups/2",
        r#"{"name": "Finance", "parent_id": 2}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["parent_id"], "A workgroup cannot be its own parent");

    Ok(())
}

#[tokio::test]
async fn creating_under_missing_parent_is_rejected() -> Result<()> {
    let app = common::test_app(common::sample_records())?;
    let (status, body) = common::send_json(
        app,
        "POST",
        "/api/workgroups",
        r#"{"name": "Fundraising", "parent_id": 99}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["parent_id"], "Parent workgroup 99 does not exist");

    Ok(())
}
