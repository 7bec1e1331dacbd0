#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use portfolio_app::reveal::observe_reveals;
use portfolio_app::theme::{apply_theme, load_theme, store_theme, Theme, THEME_STORAGE_KEY};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn theme_class_follows_preference() {
    let root = document().document_element().unwrap();

    apply_theme(Theme::Light);
    assert!(root.class_list().contains("light-theme"));

    apply_theme(Theme::Dark);
    assert!(!root.class_list().contains("light-theme"));
}

#[wasm_bindgen_test]
fn stored_theme_round_trips_and_defaults_to_dark() {
    store_theme(Theme::Light);
    assert_eq!(load_theme(), Theme::Light);

    store_theme(Theme::Dark);
    assert_eq!(load_theme(), Theme::Dark);

    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
    assert_eq!(load_theme(), Theme::Dark);
}

#[wasm_bindgen_test(async)]
async fn reveal_is_one_shot_and_sweep_clears_itself() {
    let document = document();
    let body = document.body().unwrap();

    let section = document.create_element("section").unwrap();
    section.set_class_name("sweep");
    let item = document.create_element("div").unwrap();
    item.set_class_name("reveal");
    section.append_child(&item).unwrap();
    body.append_child(&section).unwrap();

    let handle = observe_reveals(&document).expect("reveal targets present");

    // the fixture sits in the viewport, so the first observation fires
    TimeoutFuture::new(200).await;
    assert!(item.class_list().contains("show"));
    assert!(section.class_list().contains("revealed"));

    TimeoutFuture::new(1300).await;
    assert!(!section.class_list().contains("revealed"));
    assert!(item.class_list().contains("show"));

    handle.disconnect();
    body.remove_child(&section).unwrap();
}
