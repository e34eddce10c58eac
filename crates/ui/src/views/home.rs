use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Guess the Flag" }
            p { "Ten flags, four choices each. How many can you name?" }
            p {
                Link { class: "start-link", to: Route::Quiz {}, "Start quiz" }
            }
        }
    }
}
