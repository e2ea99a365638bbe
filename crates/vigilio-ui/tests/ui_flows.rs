use serde_json::json;
use vigilio_api_models::{FilesResponse, TorrentStatusResponse};
use vigilio_ui::core::banner::BannerState;
use vigilio_ui::core::format::{file_type_label, size_mib};
use vigilio_ui::core::poll::{PollHandle, PollVerdict};
use vigilio_ui::features::files::tree::{FileTree, NO_FILES_MESSAGE, Selection, listing_error};
use vigilio_ui::features::settings::state::SubtitleSelection;
use vigilio_ui::features::torrents::state::{TableBody, TorrentTableState};

fn listing() -> FilesResponse {
    serde_json::from_value(json!({
        "files": [{
            "name": "Movie (2020)",
            "full_path": "/movies/Movie (2020)",
            "date": "2024-01-01",
            "files": [{
                "name": "movie",
                "full_path": "/movies/Movie (2020)/movie.mp4",
                "suffix": ".mp4",
                "date": "2024-01-01",
                "size": 2_097_152,
                "used": true
            }]
        }],
        "missing_files": [],
        "used_files": ["/movies/Movie (2020)/movie.mp4"]
    }))
    .expect("listing fixture decodes")
}

#[test]
fn file_manager_lists_root_and_used_video() {
    let response = listing();
    let tree = FileTree::build(&response.files);
    let protected: Vec<String> = tree.first_root_name().map(str::to_string).into_iter().collect();
    let rows = tree.rows(&protected);

    assert_eq!(rows.len(), 2);
    assert!(!rows[0].selectable);
    assert_eq!(rows[0].depth, 0);

    let video = &rows[1];
    assert_eq!(video.depth, 1);
    assert!(video.used);
    assert_eq!(size_mib(video.size).as_deref(), Some("2.00"));
    assert_eq!(file_type_label(video.suffix.as_deref()), "Video");

    let mut selection = Selection::default();
    assert_eq!(selection.toggle(&rows[0]), None);
    let change = selection.toggle(video).expect("video row is selectable");
    assert!(change.is_selected);
    assert!(selection.touches(&response.used_files));

    let resolved = tree.resolve(&selection);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].full_path, "/movies/Movie (2020)/movie.mp4");
}

#[test]
fn missing_movie_folder_shows_the_no_files_error() {
    let response: FilesResponse = serde_json::from_value(json!({
        "files": [[]],
        "missing_files": ["/movies/Movie (2020)/movie.mp4"],
        "used_files": ["/movies/Movie (2020)/movie.mp4"]
    }))
    .expect("empty listing decodes");
    assert_eq!(listing_error(&response), Some(NO_FILES_MESSAGE));
    assert!(FileTree::build(&response.files).rows(&[]).is_empty());
    assert_eq!(listing_error(&listing()), None);
}

#[test]
fn polling_issues_no_fourth_request_after_three_failures() {
    let mut table = TorrentTableState::new(3);
    let mut poller = PollHandle::idle();
    assert!(poller.start("interval"));

    let mut requests = 0;
    for _tick in 0..10 {
        if !poller.is_running() {
            break;
        }
        requests += 1;
        let verdict = table.apply_failure("offline".into());
        poller.settle(verdict);
    }

    assert_eq!(requests, 3);
    assert!(table.polling_stopped());
    assert!(!poller.start("interval"));
}

#[test]
fn three_failed_polls_stop_the_torrent_table() {
    let mut table = TorrentTableState::new(3);
    assert_eq!(table.body(), TableBody::Loading);

    assert_eq!(table.apply_failure("offline".into()), PollVerdict::Continue);
    assert_eq!(table.apply_failure("offline".into()), PollVerdict::Continue);
    assert_eq!(table.apply_failure("offline".into()), PollVerdict::Stop);
    assert!(table.polling_stopped());
    assert_eq!(table.body(), TableBody::Hidden);

    let late: TorrentStatusResponse =
        serde_json::from_value(json!({ "torrents": [] })).expect("empty list decodes");
    assert_eq!(table.apply_response(late), PollVerdict::Stop);
}

#[test]
fn adding_a_selected_subtitle_language_changes_nothing() {
    let mut selection = SubtitleSelection::from_setting("en,tr");
    selection.add("en");
    assert_eq!(selection.to_setting(), "en,tr");
    assert_eq!(selection.count(), 2);
}

#[test]
fn dismissed_banner_returns_for_new_errors_only() {
    let mut banner = BannerState::new("Request failed".to_string());
    banner.dismiss();
    assert_eq!(banner.visible(), None);

    banner.replace("Request failed".to_string());
    assert_eq!(banner.visible(), None);

    banner.replace("Server unreachable".to_string());
    assert_eq!(banner.visible().map(String::as_str), Some("Server unreachable"));
}
