use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use oficina_console::clients::ShopApiClient;
use oficina_console::config::environment::EnvironmentConfig;
use oficina_console::repositories::Stores;
use oficina_console::routes::create_app;
use oficina_console::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🔧 Oficina Console - API da oficina mecânica");
    info!("================================================");

    let config = EnvironmentConfig::from_env().context("Configuração inválida")?;
    info!("⚙️ Ambiente: {}", config.environment);
    if config.cors_origins.is_empty() {
        if config.is_production() {
            warn!("⚠️ CORS permisivo en producción; configure CORS_ORIGINS");
        } else if config.is_development() {
            info!("🛠️ Modo desarrollo: CORS permisivo");
        }
    }

    let client = ShopApiClient::new(config.shop_api_url.clone(), config.shop_api_timeout)
        .map_err(|e| anyhow::anyhow!("Error creando cliente de la API do taller: {}", e))?;
    info!("🔗 API do taller: {}", client.base_url());

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    let app = create_app(AppState::new(config, Stores::http(client)));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET|POST /api/clientes, /api/veiculos, /api/servicos, /api/pecas");
    info!("   GET|PUT|DELETE /api/<catálogo>/:id");
    info!("   GET|POST /api/ordens-servico");
    info!("   GET|PUT|DELETE /api/ordens-servico/:id");
    info!("   POST /api/ordens-servico/total - Prévia do valor total");
    info!("   GET  /api/ordens-servico/:id/impressao - Ordem para impressão");
    info!("   GET  /api/dashboard - Resumo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
