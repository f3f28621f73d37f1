//! # FX Quote Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the provider adapters for the direct and inverse chains
//! - Create the quote service
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    metrics::{PeriodicReader, SdkMeterProvider},
    propagation::TraceContextPropagator,
    trace as sdktrace,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxquote_hex::{QuoteService, inbound::HttpServer};
use rate_providers::{ReqwestTransport, build_providers};

/// Exporters installed when an OTLP endpoint is configured.
struct Telemetry {
    tracer_provider: sdktrace::SdkTracerProvider,
    meter_provider: SdkMeterProvider,
}

impl Telemetry {
    fn init(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, Self)> {
        global::set_text_map_propagator(TraceContextPropagator::new());

        // gRPC exporters with batch/periodic processing (non-blocking)
        let span_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()?;
        let tracer_provider = sdktrace::SdkTracerProvider::builder()
            .with_batch_exporter(span_exporter)
            .build();
        global::set_tracer_provider(tracer_provider.clone());

        let metric_exporter = opentelemetry_otlp::MetricExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()?;
        let meter_provider = SdkMeterProvider::builder()
            .with_reader(PeriodicReader::builder(metric_exporter).build())
            .build();
        global::set_meter_provider(meter_provider.clone());

        use opentelemetry::trace::TracerProvider as _;
        let tracer = tracer_provider.tracer("fxquote-service");

        Ok((
            tracer,
            Self {
                tracer_provider,
                meter_provider,
            },
        ))
    }

    /// Flushes pending spans and metrics.
    fn shutdown(self) {
        if let Err(err) = self.tracer_provider.shutdown() {
            eprintln!("failed to flush traces: {err}");
        }
        if let Err(err) = self.meter_provider.shutdown() {
            eprintln!("failed to flush metrics: {err}");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;

    // OpenTelemetry export is opt-in
    let (otel_layer, telemetry) = match config.otlp_endpoint.as_deref() {
        Some(endpoint) => {
            let (tracer, telemetry) = Telemetry::init(endpoint)?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(telemetry),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,fxquote_app=debug,fxquote_hex=debug,rate_providers=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(otel_layer)
        .init();

    tracing::info!("Starting FX quote server on port {}", config.port);
    if let Some(endpoint) = &config.otlp_endpoint {
        tracing::info!("Exporting telemetry to {}", endpoint);
    }

    // One shared HTTP client for every adapter
    let transport = Arc::new(ReqwestTransport::new());
    let direct = build_providers(
        config.providers.as_slice(),
        &config.provider_settings,
        transport.clone(),
    )?;
    let inverse = build_providers(
        config.inverse_providers.as_slice(),
        &config.provider_settings,
        transport,
    )?;

    let service = QuoteService::new(direct)
        .with_inverse(inverse)
        .with_timeout(config.provider_timeout);

    let server = HttpServer::with_cache_max_age(service, config.cache_max_age);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    if let Some(telemetry) = telemetry {
        telemetry.shutdown();
    }
    Ok(())
}
