use axum::Router;
use teleservices::config::Config;
use teleservices::models::Teleservice;

#[allow(dead_code)]
pub fn config(api_url: &str) -> Config {
    Config {
        verbose: false,
        api_url: api_url.to_string(),
        ssh_user: Some("jdoe".to_string()),
        ssh_program: "ssh".to_string(),
    }
}

#[allow(dead_code)]
pub fn teleservice(name: &str, host: &str, packages: &[&str]) -> Teleservice {
    serde_json::from_value(serde_json::json!({
        "application_name": name,
        "is_docker": false,
        "type": "teleservices",
        "environment": "production",
        "image_id": "",
        "images_version": "",
        "vhost_name": format!("https://{}.guichet-citoyen.be", name),
        "total_size": "2048",
        "instance_port_urls": null,
        "minisites": {},
        "packages": packages,
        "host": host,
    }))
    .unwrap()
}

/// Serve `router` on an ephemeral port and return the inventory URL.
#[allow(dead_code)]
pub async fn spawn_inventory(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/application/teleservices", addr)
}
