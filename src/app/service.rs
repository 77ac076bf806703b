use crate::config::AppConfig;
use crate::core::directory::BikeDirectory;
use crate::core::resolver::AvailabilityResolver;
use crate::core::routing::RouteDecision;
use crate::core::BikeId;
use crate::server::{self, AppState};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::Serialize;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// One line of the dry-run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanPreview {
    pub bike_id: BikeId,
    pub outcome: &'static str,
    pub redirect: Option<String>,
    pub links: Vec<String>,
}

/// Validated configuration plus the resolver built from it.
pub struct BikeService {
    bind: SocketAddr,
    resolver: AvailabilityResolver<BikeDirectory>,
}

impl BikeService {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let bind = config.bind_addr()?;
        let booking_base = config.booking_url()?;
        let directory = config.build_directory()?;

        tracing::info!(
            "✅ Loaded {} bikes, booking links point at {}",
            directory.len(),
            booking_base
        );

        Ok(Self {
            bind,
            resolver: AvailabilityResolver::new(directory, booking_base),
        })
    }

    /// What a QR scan would do for every configured bike, in directory order.
    pub fn dry_run(&self) -> Vec<ScanPreview> {
        self.resolver
            .directory()
            .list_all()
            .into_iter()
            .map(|bike| {
                let resolution = self.resolver.resolve(&bike.id);
                let outcome = resolution.kind();
                let decision = RouteDecision::from(resolution);
                let links = match &decision {
                    RouteDecision::Render(options) => {
                        options.links.iter().map(|link| link.url.clone()).collect()
                    }
                    _ => Vec::new(),
                };

                ScanPreview {
                    bike_id: bike.id,
                    outcome,
                    redirect: decision.redirect_path(),
                    links,
                }
            })
            .collect()
    }

    pub fn dry_run_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.dry_run())?)
    }

    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.bind).await?;
        let app = server::router(AppState::new(self.resolver));
        server::serve(listener, app, shutdown).await
    }
}
