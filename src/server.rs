use hyper::{
    header,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use std::net::SocketAddr;
use std::{convert::Infallible, sync::Arc};

use crate::gql::{Context, Schema};

pub const GRAPHQL_PATH: &str = "/graphql";

/// Routes one request. `/graphql` answers GraphQL over GET and POST, and
/// hands a browser the GraphiQL explorer when it asks for HTML without a
/// query.
pub async fn handle(root_node: Arc<Schema>, ctx: Arc<Context>, req: Request<Body>) -> Response<Body> {
    log::debug!("{} {}", req.method(), req.uri());
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/graphiql") => juniper_hyper::graphiql(GRAPHQL_PATH, None).await,
        (&Method::GET, "/playground") => juniper_hyper::playground(GRAPHQL_PATH, None).await,
        (&Method::GET, GRAPHQL_PATH) if wants_explorer(&req) => {
            juniper_hyper::graphiql(GRAPHQL_PATH, None).await
        }
        (&Method::GET, GRAPHQL_PATH) | (&Method::POST, GRAPHQL_PATH) => {
            juniper_hyper::graphql(root_node, ctx, req).await
        }
        _ => not_found(),
    }
}

fn wants_explorer(req: &Request<Body>) -> bool {
    let accepts_html = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .map_or(false, |accept| accept.contains("text/html"));
    let has_query = req
        .uri()
        .query()
        .map_or(false, |query| query.split('&').any(|pair| pair.starts_with("query=")));
    accepts_html && !has_query
}

fn not_found() -> Response<Body> {
    let mut response = Response::new(Body::from("Not Found"));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

/// Serves until Ctrl-C.
///
/// # Errors
///
/// Will return Err if the address cannot be bound or the server fails
pub async fn run(
    server_addr: SocketAddr,
    root_node: Arc<Schema>,
    ctx: Arc<Context>,
) -> Result<(), hyper::Error> {
    let new_service = make_service_fn(move |_| {
        let root_node = root_node.clone();
        let ctx = ctx.clone();
        async move {
            Ok::<_, hyper::Error>(service_fn(move |req| {
                let root_node = root_node.clone();
                let ctx = ctx.clone();
                async move { Ok::<_, Infallible>(handle(root_node, ctx, req).await) }
            }))
        }
    });

    let server = Server::try_bind(&server_addr)?
        .serve(new_service)
        .with_graceful_shutdown(shutdown_signal());
    log::info!("Listening on http://{}{}", server_addr, GRAPHQL_PATH);
    server.await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal - {}", err);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
