use crate::configuration::Settings;
use crate::helpers;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let agent_client = helpers::AgentClient::try_new(&settings.agent)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let agent_client = web::Data::new(agent_client);

    let storage_client = web::Data::new(helpers::StorageClient::new(&settings.storage));

    let json_limit = settings.max_upload_size;
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().limit(json_limit).error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/auth")
                            .service(routes::auth::register_handler)
                            .service(routes::auth::login_handler)
                            .service(routes::auth::logout_handler)
                            .service(
                                web::scope("/me")
                                    .wrap(middleware::authentication::Manager::new())
                                    .service(routes::auth::me_handler),
                            ),
                    )
                    .service(
                        web::scope("/chats")
                            .wrap(middleware::authentication::Manager::new())
                            .service(routes::chat::get::list)
                            .service(routes::chat::add::item)
                            .service(routes::chat::message::add)
                            .service(routes::chat::get::item)
                            .service(routes::chat::update::item)
                            .service(routes::chat::delete::item),
                    )
                    .service(
                        web::scope("/pdfs")
                            .wrap(middleware::authentication::Manager::new())
                            .service(routes::pdf::upload::handler)
                            .service(routes::pdf::get::list)
                            .service(routes::pdf::get::item)
                            .service(routes::pdf::delete::item),
                    )
                    .service(
                        web::scope("/exercises")
                            .wrap(middleware::authentication::Manager::new())
                            .service(routes::exercise::generate::handler)
                            .service(routes::exercise::get::list)
                            .service(routes::exercise::get::item),
                    )
                    .service(
                        web::scope("/ai")
                            .wrap(middleware::authentication::Manager::new())
                            .service(routes::ai::ask::handler)
                            .service(routes::ai::pdf_query::handler)
                            .service(routes::ai::summarize::handler),
                    ),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
            .app_data(agent_client.clone())
            .app_data(storage_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
