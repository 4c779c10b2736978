//! Error boundaries and the shared error panel.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 14px; padding: 32px; max-width: 760px;",
                        h1 {
                            style: "color: #B91C1C; font-size: 34px; font-weight: 600;",
                            "Something broke"
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 18px;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: #1D4ED8; font-size: 18px;",
                            "Return to Home Page"
                        }
                        pre {
                            style: "color: #111827; border: 1px solid #FCA5A5; padding: 10px; border-radius: 6px; text-wrap: auto;",
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
                        title: "Component Error".to_string(),
                        error_txt,
                        button {
                            class: "x-button",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// Centered error panel. `children` go under the message, usually a retry button.
#[component]
pub fn ComponentErrorDisplay(title: ReadSignal<String>, error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-panel",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                padding: 40px 20px;
                text-align: center;
            ",

            h2 {
                style: "color: #B91C1C; font-size: 22px; font-weight: 600;",
                "{title}"
            }

            p {
                style: "color: #4B5563; font-size: 15px; max-width: 500px;",
                "{error_txt}"
            }

            {children}
        }
    }
}
