use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DESIGNER_INFO: &str = "Designed by: Team Zanzibar";
const TEAM_MEMBERS: &[&str] = &["Kofi Asare Bamfo, Doe Edinam & Enoch Taylor-Nketiah"];

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Server: Online",
            ServerStatus::Offline => "Server: Offline",
            ServerStatus::Checking => "Server: Checking...",
        }
    }

    fn css_color(&self) -> &'static str {
        match self {
            ServerStatus::Online => "green",
            ServerStatus::Offline => "red",
            ServerStatus::Checking => "gray",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Запускаем проверку при монтировании
    Effect::new(move |_| {
        spawn_local(async move {
            status.set(if ping_server().await {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" class="d400-footer">
            <span style=move || format!("color: {}; font-weight: normal; margin-right: 16px;", status.get().css_color())>
                {move || status.get().display_text()}
            </span>
            {DESIGNER_INFO}
            <br />
            {format!("Team Members: {}", TEAM_MEMBERS.join(", "))}
        </footer>
    }
}

async fn ping_server() -> bool {
    match Request::get("/health").send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}
