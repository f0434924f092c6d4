use crate::prelude::*;

use crate::utils::CCStr;

pub mod catalog;

#[component]
fn TitledView(title: CCStr, subtitle: CCStr, children: Element) -> Element {
    rsx! {
        div { class: "shrink-0",
            h1 { class: "text-6xl font-black text-center", {title} }
            h2 { class: "text-base font-light text-center", {subtitle} }
        }
        div { class: "mb-4 h-px border-t border-solid border-gray-500" }
        {children}
    }
}
