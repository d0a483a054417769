// Boots the API on an ephemeral port against a mocked Supabase project.
use filmee_api::interface_adapters::clients::SupabaseClient;
use filmee_api::interface_adapters::state::AppState;
use std::{path::PathBuf, sync::Arc, time::Duration};
use url::Url;
use wiremock::MockServer;

pub const SERVICE_KEY: &str = "service-role-key";

pub struct TestServer {
    // Base URL of the API under test.
    pub base_url: String,
    // Stand-in for the Supabase project; tests mount their expectations here.
    pub supabase: MockServer,
}

pub async fn spawn_server() -> TestServer {
    let supabase = MockServer::start().await;
    let project_url = Url::parse(&supabase.uri()).expect("mock server url");
    let client = Arc::new(
        SupabaseClient::new(project_url, SERVICE_KEY, Some(Duration::from_secs(5)))
            .expect("supabase client"),
    );

    let state = Arc::new(AppState {
        identity: client.clone(),
        catalog: client,
        frontend_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("frontend"),
    });

    // Bind before spawning so the port accepts connections immediately.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        filmee_api::run(listener, state).await.expect("server failed");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        supabase,
    }
}
