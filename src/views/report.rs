use dioxus::prelude::*;

use crate::models::Posting;

const STYLES: &str = "
        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background-color: #f4f4f4; }
        h1 { text-align: center; color: #333; }
        .container { max-width: 800px; margin: 0 auto; background: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .job a { color: #007bff; text-decoration: none; font-weight: bold; }
        .job a:hover { text-decoration: underline; }
        .error { color: red; font-style: italic; }
";

#[component]
pub fn Report(postings: Vec<Posting>) -> Element {
    rsx! {
        head {
            meta { charset: "UTF-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1.0",
            }
            title { "Bank Jobs - FreeJobAlert" }
            style { {STYLES} }
        }
        body {
            h1 { "Latest Bank Job Notifications" }
            div {
                class: "container",
                table {
                    tr {
                        th { "Job Title" }
                        th { "Date" }
                    }
                    for posting in postings {
                        PostingRow { posting: posting }
                    }
                }
            }
        }
    }
}

/// One table row per posting, plus an error row when the posting has one.
#[component]
fn PostingRow(posting: Posting) -> Element {
    let Posting { title, link, date, error } = posting;

    rsx! {
        tr {
            class: "job",
            td {
                a { href: "{link}", target: "_blank", "{title}" }
            }
            td { "{date}" }
        }
        {error.map(|error| rsx! {
            tr {
                td { colspan: "2", class: "error", "{error}" }
            }
        })}
    }
}

/// Renders the full report document. Text and attributes are escaped by the
/// SSR renderer; the doctype and `<html>` shell are added around its output.
pub fn render(postings: &[Posting]) -> String {
    let mut dom = VirtualDom::new_with_props(
        Report,
        ReportProps {
            postings: postings.to_vec(),
        },
    );
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">{}</html>\n",
        dioxus_ssr::render(&dom)
    )
}
