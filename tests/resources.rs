//
//  kongo
//  tests/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Method, path, query and body contracts of the resource services.

use mockito::{Matcher, Server, ServerGuard};
use reqwest::StatusCode;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use kongo::api::common::ListOptions;
use kongo::api::resources::{
    Api, Certificate, Consumer, Customer, CustomerListOptions, NewService, Route,
    RouteServiceRef, ServiceHost, ServiceTarget, ServiceUpdate, Sni,
};
use kongo::{KongClient, KongError};

async fn setup() -> (ServerGuard, KongClient) {
    let server = Server::new_async().await;
    let client = KongClient::new(&server.url()).unwrap();
    (server, client)
}

const SERVICE_JSON: &str = r#"{
    "id": "4e13f54a-bbf1-47a8-8777-255fed7116f2",
    "name": "billing",
    "protocol": "http",
    "host": "billing.internal",
    "port": 8080,
    "path": "/v1",
    "retries": 5,
    "connect_timeout": 60000,
    "read_timeout": 60000,
    "write_timeout": 60000,
    "created_at": 1422386534,
    "updated_at": 1422386534
}"#;

#[tokio::test]
async fn test_node_info_and_status() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(r#"{"hostname":"kong-1","version":"0.13.0","tagline":"Welcome to kong"}"#)
        .create_async()
        .await;
    let _mock = server
        .mock("GET", "/status")
        .with_status(200)
        .with_body(r#"{"database":{"reachable":true},"server":{"total_requests":7}}"#)
        .create_async()
        .await;

    let (info, _) = client.node().info().await.unwrap();
    assert_eq!(info.hostname, "kong-1");
    assert_eq!(info.version, "0.13.0");

    let (status, _) = client.node().status().await.unwrap();
    assert!(status.database.reachable);
    assert_eq!(status.server.total_requests, 7);
}

#[tokio::test]
async fn test_cluster_status_and_delete() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/cluster")
        .with_status(200)
        .with_body(
            r#"{"total":2,"data":[
                {"address":"10.0.0.1:7946","name":"kong-1","status":"alive"},
                {"address":"10.0.0.2:7946","name":"kong-2","status":"failed"}
            ]}"#,
        )
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/cluster/kong-2")
        .with_status(200)
        .create_async()
        .await;

    let (cluster, _) = client.cluster().status().await.unwrap();
    assert_eq!(cluster.total, 2);
    assert_eq!(cluster.nodes[1].status, "failed");

    client.cluster().delete("kong-2").await.unwrap();
    delete.assert_async().await;
}

#[tokio::test]
async fn test_service_create_by_url() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/services")
        .match_body(Matcher::Json(json!({
            "name": "billing",
            "url": "http://billing.internal:8080/v1"
        })))
        .with_status(201)
        .with_body(SERVICE_JSON)
        .create_async()
        .await;

    let (service, response) = client
        .services()
        .create(&NewService::by_url("billing", "http://billing.internal:8080/v1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(service.host, "billing.internal");
    assert_eq!(service.port, 8080);
    assert_eq!(service.created_at.to_string(), "2015-01-27T20:42:14Z");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_create_by_host() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/services")
        .match_body(Matcher::Json(json!({
            "name": "billing",
            "host": "billing.internal",
            "port": 8080,
            "path": "/v1"
        })))
        .with_status(201)
        .with_body(SERVICE_JSON)
        .create_async()
        .await;

    let target = ServiceHost::new("billing.internal").port(8080).path("/v1");
    client
        .services()
        .create(&NewService::by_host("billing", target))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_update_and_delete() {
    let (mut server, client) = setup().await;
    let update = server
        .mock("PATCH", "/services/billing")
        .match_body(Matcher::Json(json!({"url": "https://billing.internal"})))
        .with_status(200)
        .with_body(SERVICE_JSON)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/services/billing")
        .with_status(204)
        .create_async()
        .await;

    let change = ServiceUpdate {
        name: None,
        target: Some(ServiceTarget::Url {
            url: "https://billing.internal".into(),
        }),
    };
    client.services().update("billing", &change).await.unwrap();

    let response = client.services().delete("billing").await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_service_list_passes_paging_through() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/services")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), "abc".into()),
            Matcher::UrlEncoded("size".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(format!(
            r#"{{"data":[{SERVICE_JSON}],"next":"/services?offset=def&size=1","offset":"def"}}"#
        ))
        .create_async()
        .await;

    let options = ListOptions::default().offset("abc").size(1);
    let (page, _) = client.services().list(&options).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.data[0].name, "billing");
    assert!(page.has_next());
    assert_eq!(page.next_offset(), Some("def"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_get_not_found() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/services/missing")
        .with_status(404)
        .with_body(r#"{"message":"Not found"}"#)
        .create_async()
        .await;

    let err = client.services().get("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "404 Not found");
}

#[tokio::test]
async fn test_route_create_and_list_with_null_fields() {
    let (mut server, client) = setup().await;
    let create = server
        .mock("POST", "/routes")
        .match_body(Matcher::PartialJson(json!({
            "paths": ["/billing"],
            "service": {"id": "4e13f54a"}
        })))
        .with_status(201)
        .with_body(r#"{"id":"r1","paths":["/billing"],"hosts":null,"methods":null,"service":{"id":"4e13f54a"}}"#)
        .create_async()
        .await;
    let _mock = server
        .mock("GET", "/routes")
        .with_status(200)
        .with_body(r#"{"data":[{"id":"r1","hosts":null,"paths":["/billing"],"created_at":""}],"next":null}"#)
        .create_async()
        .await;

    let route = Route {
        paths: vec!["/billing".into()],
        service: Some(RouteServiceRef::new("4e13f54a")),
        ..Route::default()
    };
    let (created, _) = client.routes().create(&route).await.unwrap();
    assert_eq!(created.id, "r1");
    assert!(created.hosts.is_empty());

    let (page, _) = client.routes().list(&ListOptions::default()).await.unwrap();
    assert!(!page.has_next());
    assert!(page.data[0].created_at.is_zero());
    create.assert_async().await;
}

#[tokio::test]
async fn test_route_update_uses_patch() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PATCH", "/routes/r1")
        .match_body(Matcher::PartialJson(json!({"strip_path": true})))
        .with_status(200)
        .with_body(r#"{"id":"r1","strip_path":true}"#)
        .create_async()
        .await;

    let route = Route {
        strip_path: true,
        ..Route::default()
    };
    let (updated, _) = client.routes().update("r1", &route).await.unwrap();
    assert!(updated.strip_path);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_route_update_sends_only_set_fields() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PATCH", "/routes/r1")
        .match_body(Matcher::Json(json!({"hosts": ["a.com"]})))
        .with_status(200)
        .with_body(r#"{"id":"r1","hosts":["a.com"],"strip_path":true,"preserve_host":true}"#)
        .create_async()
        .await;

    let route = Route {
        hosts: vec!["a.com".into()],
        ..Route::default()
    };
    let (updated, _) = client.routes().update("r1", &route).await.unwrap();
    assert!(updated.strip_path);
    assert!(updated.preserve_host);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_names_are_escaped_in_the_path() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/services/a%3Fb")
        .with_status(200)
        .with_body(SERVICE_JSON)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/services/a%23b")
        .with_status(204)
        .create_async()
        .await;

    let (service, _) = client.services().get("a?b").await.unwrap();
    assert_eq!(service.name, "billing");
    client.services().delete("a#b").await.unwrap();

    mock.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_certificate_get_by_sni_and_delete() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/certificates/example.com")
        .with_status(200)
        .with_body(r#"{"id":"c1","cert":"CERT","key":"KEY","snis":["example.com"],"created_at":"1422386534"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/certificates/c1")
        .with_status(204)
        .create_async()
        .await;

    let (certificate, _) = client.certificates().get("example.com").await.unwrap();
    assert_eq!(certificate.id, "c1");
    assert_eq!(certificate.snis, vec!["example.com".to_string()]);

    client.certificates().delete("c1").await.unwrap();
    delete.assert_async().await;
}

#[tokio::test]
async fn test_certificate_create_and_list() {
    let (mut server, client) = setup().await;
    let create = server
        .mock("POST", "/certificates")
        .match_body(Matcher::Json(json!({"cert": "CERT", "key": "KEY"})))
        .with_status(201)
        .with_body(r#"{"id":"c1","cert":"CERT","key":"KEY","snis":null}"#)
        .create_async()
        .await;
    let _mock = server
        .mock("GET", "/certificates")
        .with_status(200)
        .with_body(r#"{"data":[],"total":0}"#)
        .create_async()
        .await;

    let certificate = Certificate {
        cert: "CERT".into(),
        key: "KEY".into(),
        ..Certificate::default()
    };
    let (created, _) = client.certificates().create(&certificate).await.unwrap();
    assert!(created.snis.is_empty());

    let (page, _) = client.certificates().list().await.unwrap();
    assert!(page.is_empty());
    create.assert_async().await;
}

#[tokio::test]
async fn test_customer_list_filters() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/customers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "ada lovelace".into()),
            Matcher::UrlEncoded("size".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[{"id":"u1","username":"ada lovelace","custom_id":null}]}"#)
        .create_async()
        .await;

    let options = CustomerListOptions {
        username: Some("ada lovelace".into()),
        size: Some(5),
        ..Default::default()
    };
    let (page, _) = client.customers().list(&options).await.unwrap();
    assert_eq!(page.data[0].username.as_deref(), Some("ada lovelace"));
    assert!(page.data[0].custom_id.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_customer_create_update_delete() {
    let (mut server, client) = setup().await;
    let create = server
        .mock("POST", "/customers")
        .match_body(Matcher::Json(json!({"username": "ada"})))
        .with_status(201)
        .with_body(r#"{"id":"u1","username":"ada"}"#)
        .create_async()
        .await;
    let update = server
        .mock("PATCH", "/customers/u1")
        .match_body(Matcher::Json(json!({"custom_id": "42"})))
        .with_status(200)
        .with_body(r#"{"id":"u1","username":"ada","custom_id":"42"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/customers/u1")
        .with_status(204)
        .create_async()
        .await;

    let customer = Customer {
        username: Some("ada".into()),
        ..Customer::default()
    };
    let (created, _) = client.customers().create(&customer).await.unwrap();
    assert_eq!(created.id, "u1");

    let change = Customer {
        custom_id: Some("42".into()),
        ..Customer::default()
    };
    let (updated, _) = client.customers().update("u1", &change).await.unwrap();
    assert_eq!(updated.custom_id.as_deref(), Some("42"));

    client.customers().delete("u1").await.unwrap();

    create.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_sni_create_and_get() {
    let (mut server, client) = setup().await;
    let create = server
        .mock("POST", "/snis")
        .match_body(Matcher::Json(json!({
            "name": "example.com",
            "ssl_certificate_id": "c1"
        })))
        .with_status(201)
        .with_body(r#"{"name":"example.com","ssl_certificate_id":"c1","created_at":1422386534}"#)
        .create_async()
        .await;
    let _mock = server
        .mock("GET", "/snis/example.com")
        .with_status(200)
        .with_body(r#"{"name":"example.com","ssl_certificate_id":"c1"}"#)
        .create_async()
        .await;

    let (created, _) = client
        .snis()
        .create(&Sni::new("example.com", "c1"))
        .await
        .unwrap();
    assert_eq!(created.created_at.unix_seconds(), Some(1422386534));

    let (sni, _) = client.snis().get("example.com").await.unwrap();
    assert_eq!(sni.ssl_certificate_id, "c1");
    create.assert_async().await;
}

#[tokio::test]
async fn test_consumers_round_trip() {
    let (mut server, client) = setup().await;
    let create = server
        .mock("POST", "/consumers")
        .match_body(Matcher::Json(json!({"username": "test"})))
        .with_status(201)
        .with_body(r#"{"id":"k1","username":"test","created_at":1428555626000}"#)
        .create_async()
        .await;
    let _mock = server
        .mock("GET", "/consumers")
        .with_status(200)
        .with_body(r#"{"data":[{"id":"k1","username":"test"}],"total":1}"#)
        .create_async()
        .await;

    let (created, _) = client
        .consumers()
        .create(&Consumer::with_username("test"))
        .await
        .unwrap();
    assert_eq!(created.created_at, Some(1428555626000));

    let (page, _) = client.consumers().list().await.unwrap();
    assert_eq!(page.total, Some(1));
    create.assert_async().await;
}

#[tokio::test]
async fn test_apis_create_and_get() {
    let (mut server, client) = setup().await;
    let create = server
        .mock("POST", "/apis")
        .match_body(Matcher::PartialJson(json!({
            "name": "mockbin",
            "upstream_url": "http://mockbin.com"
        })))
        .with_status(201)
        .with_body(r#"{"id":"a1","name":"mockbin","upstream_url":"http://mockbin.com"}"#)
        .create_async()
        .await;
    let _mock = server
        .mock("GET", "/apis/a1")
        .with_status(200)
        .with_body(r#"{"id":"a1","name":"mockbin","upstream_url":"http://mockbin.com","preserve_host":true}"#)
        .create_async()
        .await;

    let api = Api {
        name: "mockbin".into(),
        upstream_url: "http://mockbin.com".into(),
        ..Api::default()
    };
    client.apis().create(&api).await.unwrap();

    let (fetched, _) = client.apis().get("a1").await.unwrap();
    assert!(fetched.preserve_host);
    create.assert_async().await;
}

#[tokio::test]
async fn test_service_view_binds_cancellation() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/routes/r1")
        .with_status(200)
        .with_body(r#"{"id":"r1"}"#)
        .create_async()
        .await;

    let token = CancellationToken::new();
    token.cancel();

    let err = client.routes().with_cancel(token).get("r1").await.unwrap_err();
    assert!(matches!(err, KongError::Cancelled));
}
