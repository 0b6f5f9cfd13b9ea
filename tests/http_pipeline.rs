//! Full run through the HTTP clients against a local server

use mockito::{Matcher, Server, ServerGuard};

use gildas_release::app::{RunOptions, run};
use gildas_release::config::Config;
use gildas_release::release::registries::DockerHubRegistry;
use gildas_release::release::sources::DirectoryListingSource;

fn listing(files: &[&str]) -> String {
    let rows: String = files
        .iter()
        .map(|f| format!("<tr><td><a href=\"{0}\">{0}</a></td></tr>\n", f))
        .collect();
    format!("<html><body><table>\n{}</table></body></html>", rows)
}

fn config_for(server: &ServerGuard) -> Config {
    Config {
        registry_url: server.url(),
        dist_url: format!("{}/dist/", server.url()),
        gildas_archive_url: format!("{}/dist/archive/gildas", server.url()),
        piic_archive_url: format!("{}/dist/archive/piic", server.url()),
        ..Config::default()
    }
}

#[tokio::test]
async fn prints_missing_images_from_live_listings() {
    let mut server = Server::new_async().await;

    let tags = server
        .mock("GET", "/v2/repositories/abeelen/gildas/tags/")
        .match_query(Matcher::UrlEncoded(
            "page_size".to_string(),
            "1000".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"name": "latest"}, {"name": "jan26a"}, {"name": "build"}]}"#)
        .create_async()
        .await;
    let main = server
        .mock("GET", "/dist/")
        .expect(2)
        .with_status(200)
        .with_body(listing(&[
            "gildas-src-jan26a.tar.xz",
            "piic-exe-jan26a.tar.xz",
            "piic-exe-ifort-jan26a.tar.xz",
        ]))
        .create_async()
        .await;
    let gildas_archive = server
        .mock("GET", "/dist/archive/gildas")
        .with_status(200)
        .with_body(listing(&["gildas-src-jun23b.tar.xz"]))
        .create_async()
        .await;
    let piic_archive = server
        .mock("GET", "/dist/archive/piic")
        .with_status(200)
        .with_body(listing(&[]))
        .create_async()
        .await;

    let config = config_for(&server);
    let source = DirectoryListingSource::new(&config);
    let registry = DockerHubRegistry::new(&config.registry_url);
    let mut out = Vec::new();

    run(&config, &source, &registry, &RunOptions::default(), &mut out)
        .await
        .unwrap();

    tags.assert_async().await;
    // Main listing is shared by both packages
    main.assert_async().await;
    gildas_archive.assert_async().await;
    piic_archive.assert_async().await;

    let output = String::from_utf8(out).unwrap();
    let gildas_archive_url = format!("{}/dist/archive/gildas", server.url());
    assert_eq!(
        output.lines().filter(|l| l.starts_with("# ")).collect::<Vec<_>>(),
        vec![
            "# Without piic",
            "# * jun23b not in dockerhub",
            "# With piic",
            "# * jan26a-piic not in dockerhub launch :",
        ]
    );
    assert!(output.contains(&format!("--build-arg GILDAS_URL={}", gildas_archive_url)));
    assert!(!output.contains("ifort"));
}

#[tokio::test]
async fn fails_when_listing_is_unavailable() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/v2/repositories/abeelen/gildas/tags/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/dist/")
        .with_status(500)
        .create_async()
        .await;

    let config = config_for(&server);
    let source = DirectoryListingSource::new(&config);
    let registry = DockerHubRegistry::new(&config.registry_url);
    let mut out = Vec::new();

    let result = run(&config, &source, &registry, &RunOptions::default(), &mut out).await;

    assert!(result.is_err());
    assert!(out.is_empty());
}
