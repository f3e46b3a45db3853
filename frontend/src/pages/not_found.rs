use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="section">
            <h2>{"404 - Page not found"}</h2>
            <p>{"The page you requested does not exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("badge")}>
                {"Back to the troubleshooting guide"}
            </Link<Route>>
        </main>
    }
}
