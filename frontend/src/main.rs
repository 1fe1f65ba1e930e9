use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod helpers;
mod logging;
mod storage;
mod tops_sheet;
mod upload;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
