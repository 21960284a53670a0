#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod forms;

#[cfg(feature = "server")]
pub mod dispatch;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::dispatch;
    use crate::models::config::ServerConfig;
    use crate::routes;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // The webhook URL is resolved once here and injected into handlers.
        let dispatcher = web::Data::from(dispatch::from_config(&server_config));

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .app_data(web::Data::new(tera.clone()))
                .app_data(dispatcher.clone())
                .configure(routes::configure)
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
