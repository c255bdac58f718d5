use std::io::{self, Write};
use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use axum::extract::{Request, State};
use axum::http::uri::PathAndQuery;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tower_http::services::ServeDir;

use crate::resolve::{self, CATALOG_PAGE, CatalogRoots, Route};

/// The two static-file services the router dispatches between.
#[derive(Clone)]
struct StaticDirs {
    docs: ServeDir,
    assets: ServeDir,
}

/// Build the catalog router.
///
/// A single fallback handler applies the asset prefix rule and hands the
/// request to one of two [`ServeDir`] services; everything about actually
/// serving files (MIME types, index.html, 404s, traversal guarding) is
/// theirs.
pub fn router(roots: &CatalogRoots) -> Router {
    let dirs = StaticDirs {
        docs: ServeDir::new(roots.docs()),
        assets: ServeDir::new(roots.assets()),
    };
    Router::new().fallback(serve_path).with_state(dirs)
}

async fn serve_path(State(dirs): State<StaticDirs>, req: Request) -> Response {
    match resolve::route(req.uri().path()) {
        Route::Assets(remainder) => {
            // ServeDir resolves against its own root, so the prefix has to go
            // before delegation.
            let stripped = format!("/{remainder}");
            match rewrite_path(req, &stripped) {
                Ok(req) => serve_from(dirs.assets.clone(), req).await,
                Err(_) => StatusCode::BAD_REQUEST.into_response(),
            }
        }
        Route::Docs(_) => serve_from(dirs.docs.clone(), req).await,
    }
}

async fn serve_from(mut dir: ServeDir, req: Request) -> Response {
    match dir.try_call(req).await {
        Ok(response) => response.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Replace the request path, keeping the query string intact.
fn rewrite_path(mut req: Request, new_path: &str) -> Result<Request, axum::http::Error> {
    let path_and_query: PathAndQuery = match req.uri().query() {
        Some(query) => format!("{new_path}?{query}").parse()?,
        None => new_path.parse()?,
    };
    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    *req.uri_mut() = Uri::from_parts(parts)?;
    Ok(req)
}

/// Bind the catalog server and run it until the process is killed.
///
/// Prints the catalog URL as the only line on stdout; past that point the
/// server stays silent unless `RUST_LOG` enables diagnostics.
pub async fn serve(roots: CatalogRoots, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    println!("Icon catalog: http://{local}/{CATALOG_PAGE}");
    io::stdout().flush()?;

    tracing::debug!(
        docs = %roots.docs().display(),
        assets = %roots.assets().display(),
        "serving catalog roots"
    );

    axum::serve(listener, router(&roots)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn rewrite_replaces_the_path() {
        let req = rewrite_path(request("/assets/play.png"), "/play.png").unwrap();
        assert_eq!(req.uri().path(), "/play.png");
        assert_eq!(req.uri().query(), None);
    }

    #[test]
    fn rewrite_keeps_the_query_string() {
        let req = rewrite_path(request("/assets/play.png?v=2&theme=dark"), "/play.png").unwrap();
        assert_eq!(req.uri().path(), "/play.png");
        assert_eq!(req.uri().query(), Some("v=2&theme=dark"));
    }

    #[test]
    fn rewrite_handles_the_bare_prefix() {
        let req = rewrite_path(request("/assets/"), "/").unwrap();
        assert_eq!(req.uri().path(), "/");
    }
}
