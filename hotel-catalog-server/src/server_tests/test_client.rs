use axum::Router;
use reqwest::{Method, RequestBuilder};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

pub struct TestClient {
	server_handle: axum_server::Handle<SocketAddr>,
	client: reqwest::Client,
	server_address: SocketAddr,
}

impl TestClient {
	pub async fn new(router: Router) -> anyhow::Result<Self> {
		// NOTE: port 0 assigns a random available port
		let socket_address = SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0);

		let (bind_address, handle) = loop {
			let handle = axum_server::Handle::new();
			let server = axum_server::Server::bind(socket_address.into()).handle(handle.clone());

			tokio::spawn(server.serve(router.clone().into_make_service()));

			if let Some(address) = handle.listening().await {
				break (address, handle);
			}
		};

		let client = reqwest::Client::builder()
			.connect_timeout(Duration::from_secs(10))
			.timeout(Duration::from_secs(30))
			.build()?;

		Ok(Self {
			server_handle: handle,
			client,
			server_address: bind_address,
		})
	}

	pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let base_address = self.server_address;
		let path = path.trim_start_matches('/');
		self.client.request(method, format!("http://{base_address}/{path}"))
	}

	pub fn get(&self, path: &str) -> RequestBuilder {
		self.request(Method::GET, path)
	}
}

impl Drop for TestClient {
	fn drop(&mut self) {
		self.server_handle.graceful_shutdown(Some(Duration::from_secs(5)));
	}
}
