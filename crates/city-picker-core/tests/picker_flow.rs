use city_picker_core::prelude::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[derive(Default)]
struct RecordingNav {
    home_calls: usize,
}

impl Navigator for RecordingNav {
    fn navigate_home(&mut self) {
        self.home_calls += 1;
    }
}

#[derive(Default)]
struct RecordingScroll {
    targets: Vec<String>,
}

impl ScrollTarget for RecordingScroll {
    fn scroll_to_group(&mut self, letter: &str) {
        self.targets.push(letter.to_string());
    }
}

fn sample() -> CityData {
    CityData::from_json_str(
        r#"{
            "hotCities": [
                {"id": "1", "name": "北京", "spell": "beijing"},
                {"id": "2", "name": "上海", "spell": "shanghai"}
            ],
            "cities": {
                "B": [{"id": "1", "name": "北京", "spell": "beijing"},
                      {"id": "3", "name": "包头", "spell": "baotou"}],
                "N": [{"id": "4", "name": "南京", "spell": "nanjing"}],
                "S": [{"id": "2", "name": "上海", "spell": "shanghai"},
                      {"id": "5", "name": "苏州", "spell": "suzhou"}]
            }
        }"#,
    )
    .unwrap()
}

fn picker() -> CityPicker<RecordingNav, RecordingScroll> {
    CityPicker::new(
        sample(),
        &PickerConfig::default(),
        Box::new(FixedLayout::new(100.0, 20.0)),
        RecordingNav::default(),
        RecordingScroll::default(),
    )
}

#[test]
fn typing_burst_produces_one_results_event() {
    let mut p = picker();
    p.set_query(ms(0), "a");
    p.set_query(ms(80), "ab");
    p.set_query(ms(160), "abc");
    assert!(p.tick(ms(300)).is_empty());

    let events = p.tick(ms(360));
    assert_eq!(
        events,
        vec![PickerEvent::ResultsUpdated {
            query: "abc".into(),
            count: 0
        }]
    );
    assert_eq!(p.search().revision(), 1);
}

#[test]
fn search_results_preserve_dataset_order() {
    let mut p = picker();
    p.set_query(ms(0), "a");
    p.tick(ms(200));
    let ids: Vec<_> = p.results().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "4", "2"]);
}

#[test]
fn touch_scrub_scrolls_the_list() {
    let mut p = picker();
    assert_eq!(p.letters(), ["B", "N", "S"]);

    p.touch_start();
    p.touch_move(ms(0), 145.0);
    let events = p.tick(ms(16));
    assert_eq!(
        events,
        vec![PickerEvent::LetterSelected { letter: "S".into() }]
    );
    p.touch_move(ms(20), 165.0);
    assert!(p.tick(ms(40)).is_empty());
    p.touch_end();

    assert_eq!(p.scroller().targets, vec!["S".to_string()]);
}

#[test]
fn touch_without_start_does_nothing() {
    let mut p = picker();
    p.touch_move(ms(0), 105.0);
    assert!(p.tick(ms(100)).is_empty());
    assert!(p.scroller().targets.is_empty());
}

#[test]
fn every_entry_point_converges_on_the_same_store_update() {
    let mut via_hot = picker();
    let mut via_group = picker();
    let mut via_search = picker();
    assert_eq!(via_hot.selected_city(), "北京");

    via_hot.choose_hot(1).unwrap();
    via_group.choose_grouped("S", 0).unwrap();
    via_search.set_query(ms(0), "shang");
    via_search.tick(ms(200));
    let event = via_search.choose_result(0).unwrap();

    assert_eq!(
        event,
        PickerEvent::CitySelected {
            name: "上海".into()
        }
    );
    for p in [&via_hot, &via_group, &via_search] {
        assert_eq!(p.selected_city(), "上海");
        assert_eq!(p.navigator().home_calls, 1);
    }
}

#[test]
fn choosing_out_of_range_changes_nothing() {
    let mut p = picker();
    assert!(p.choose_hot(9).is_none());
    assert!(p.choose_grouped("Q", 0).is_none());
    assert!(p.choose_result(0).is_none());
    assert_eq!(p.selected_city(), "北京");
    assert_eq!(p.navigator().home_calls, 0);
}

#[test]
fn replacing_data_updates_letters_and_search() {
    let mut p = picker();
    p.set_data(CityData {
        hot_cities: vec![],
        cities: CityDataset::from_groups([("X", vec![CityRecord::new("7", "西安", "xian")])]),
    });
    assert_eq!(p.letters(), ["X"]);
    assert!(p.hot_cities().is_empty());

    p.set_query(ms(0), "xi");
    p.tick(ms(200));
    assert_eq!(p.results().len(), 1);
}

#[test]
fn teardown_cancels_pending_work() {
    let mut p = picker();
    p.set_query(ms(0), "bei");
    p.touch_start();
    p.touch_move(ms(0), 105.0);
    p.teardown();
    assert!(p.tick(ms(1_000)).is_empty());
    assert_eq!(p.search().revision(), 0);
}

#[test]
fn configured_windows_and_default_city_are_honoured() {
    let config = PickerConfig::from_toml_str(
        "search_debounce_ms = 50\ntouch_debounce_ms = 5\ndefault_city = \"南京\"\n",
    )
    .unwrap();
    let mut p = CityPicker::new(
        sample(),
        &config,
        Box::new(FixedLayout::new(0.0, 10.0)),
        Detached,
        Detached,
    );
    assert_eq!(p.selected_city(), "南京");

    p.set_query(ms(0), "su");
    p.touch_start();
    p.touch_move(ms(0), 12.0);
    let events = p.tick(ms(50));
    assert_eq!(events.len(), 2);
    assert!(events.contains(&PickerEvent::LetterSelected { letter: "N".into() }));
}

#[test]
fn flush_search_skips_the_window() {
    let mut p = picker();
    p.set_query(ms(0), "jing");
    let event = p.flush_search().unwrap();
    assert_eq!(
        event,
        PickerEvent::ResultsUpdated {
            query: "jing".into(),
            count: 2
        }
    );
    assert!(p.flush_search().is_none());
}

#[test]
fn lookup_by_name_prefers_hot_list_then_groups() {
    let mut p = picker();
    assert_eq!(p.find_by_name("上海").map(|c| c.id()), Some("2"));
    assert_eq!(p.find_by_name("苏州").map(|c| c.id()), Some("5"));
    assert!(p.find_by_name("杭州").is_none());

    let name = p.find_by_name("苏州").unwrap().name().to_string();
    p.choose(&name);
    assert_eq!(p.selected_city(), "苏州");
    assert_eq!(p.navigator().home_calls, 1);
}
