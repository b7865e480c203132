//! Controls above the job list: result count, share link and paging.

use common::job_listing::page_count_for;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdInsertLink, md_navigation_icons::{MdArrowBack, MdArrowForward}}};

use crate::components::job_components::job_listing_view::JobListingState;

#[component]
pub fn ListingControls() -> Element {
    rsx! {
        div {
            id: "x-job-listing-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                JobCountString { }
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            CopyLinkButton {}
            PaginationControls {}
        }
    }
}

#[component]
fn PaginationControls() -> Element {
    let listing_state = use_context::<JobListingState>();
    let listing = listing_state.listing;
    let current_page = listing_state.current_page;
    let set_current_page = listing_state.set_current_page;

    let total_count = use_memo(move || match listing.read().as_ref() {
        Some(Ok(listing)) => listing.total_count,
        _ => 0,
    });
    let max_pages = use_memo(move || page_count_for(total_count()));
    let selected_page = use_memo(move || {
        let current_page = *current_page.read() + 1;
        current_page.min(max_pages())
    });
    let can_go_to_previous_page = use_memo(move || selected_page() > 1);
    let can_go_to_next_page = use_memo(move || selected_page() < max_pages());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            PageButton {
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| set_current_page(current_page() - 1),
                Icon { icon: MdArrowBack, style: "width: 22px; height: 22px;" }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                ",
                "{selected_page()}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{max_pages()}"
                }
            }
            PageButton {
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| set_current_page(current_page() + 1),
                Icon { icon: MdArrowForward, style: "width: 22px; height: 22px;" }
            }
        }
    }
}

#[component]
fn PageButton(label: &'static str, disabled: ReadSignal<bool>, onclick: Callback<()>, children: Element) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            aria_label: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: none;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                color: {btn_color};
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            {children}
        }
    }
}

#[component]
fn CopyLinkButton() -> Element {
    let do_copy_link = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else { return };
            let Ok(url) = window.location().href() else { return };
            let promise = window.navigator().clipboard().write_text(&url);
            spawn(async move {
                match wasm_bindgen_futures::JsFuture::from(promise).await {
                    Ok(_) => dioxus::logger::tracing::info!("Link copied to clipboard: {}", url),
                    Err(e) => dioxus::logger::tracing::error!("Clipboard write failed: {:?}", e),
                }
            });
        }
    };
    rsx! {
        button {
            title: "Copy link to these results",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: white;
                padding: 4px 10px;
                margin-right: 12px;
                cursor: pointer;
                font-size: 14px;
            ",
            onclick: do_copy_link,
            Icon { icon: MdInsertLink, style: "width: 18px; height: 18px;" }
            "Share"
        }
    }
}

#[component]
fn JobCountString() -> Element {
    let listing_state = use_context::<JobListingState>();
    let listing = listing_state.listing;

    match listing.read().as_ref() {
        Some(Err(e)) => return rsx! { "! error: {e:?}" },
        Some(Ok(s)) => return rsx! { "{s.total_count} jobs found" },
        None => return rsx! {"..."}
    };
}
