//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::{Query, Request}, middleware::Next, response::Redirect};
        use dioxus::server::axum;
        use frontend::routes::Route;

        Ok(dioxus::server::router(App)
        .route("/_jobs_feed", axum::routing::get(backend::server_extra::jobs_link::jobs_feed))
        // plain query-string links from outside the app land on the filtered jobs page
        .route("/jobs_link", axum::routing::get(|Query(pairs): Query<Vec<(String, String)>>| async move {
            let query = backend::server_extra::jobs_link::job_search_query_from_pairs(&pairs);
            Redirect::to(&Route::jobs_page_from_query(query).to_string())
        }))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    dioxus::logger::tracing::debug!("{} -> {}", path, res.status());
                    res
                },
            )))
    });
}
