//! Entry point for the site server.

use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use atelier_server::logging::init_logging;
use atelier_server::{AppState, Args, routes};
use clap::Parser;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let state = web::Data::new(AppState::from_args(&args).context("building weather client")?);
    log::info!(
        "serving shaders from {} on {}:{}",
        args.shader_dir.display(),
        args.bind,
        args.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(
                // shaders are fetched cross-origin by the WebGL sketches
                middleware::DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")),
            )
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind((args.bind.as_str(), args.port))
    .with_context(|| format!("binding {}:{}", args.bind, args.port))?
    .run()
    .await?;

    Ok(())
}
