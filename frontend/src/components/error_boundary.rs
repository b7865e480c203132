//! Error boundaries for whole pages and for single panels.

use dioxus::prelude::*;

use common::job_listing::JobSearchQuery;
use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in {}: {:?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; padding: 24px; max-width: 720px;",
                        h1 {
                            style: "color: #B91C1C; font-size: 40px; font-weight: 500; margin: 0;",
                            "Something went wrong"
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 18px; margin: 0;",
                            "Section: {boundary_name}"
                        }
                        div {
                            style: "display: flex; flex-direction: row; gap: 12px;",
                            a {
                                href: "/",
                                style: "color: #4F46E5; font-size: 18px; border: 1px solid #4F46E5; padding: 8px 14px; border-radius: 8px;",
                                "Home"
                            }
                            a {
                                href: Route::jobs_page_from_query(JobSearchQuery::default()).to_string(),
                                style: "color: #4F46E5; font-size: 18px; border: 1px solid #4F46E5; padding: 8px 14px; border-radius: 8px;",
                                "Return to job search"
                            }
                        }
                        pre {
                            style: "color: #111827; background: #FEF2F2; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 16px; border: 1px solid #4F46E5; background: white; padding: 8px 14px; border-radius: 8px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "10px",

            h2 {
                style: "color: #B91C1C; font-size: 24px; font-weight: 500; margin: 0;",
                "Could not load this section",
            }

            pre {
                style: "color: #7F1D1D; background: #FEF2F2; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
