//! Endpoint mapping tests: each sub-client hits the right path and verb and
//! shapes the response.

mod common;

use mockito::Matcher;
use serde_json::json;

use tenable_io::domain::agents::{AgentFilter, AgentListParams, DEFAULT_AGENT_SCANNER};
use tenable_io::domain::assets::AssetImport;
use tenable_io::domain::audit_log::EventFilter;
use tenable_io::domain::folders::FolderType;
use tenable_io::domain::scans::{ScanCreate, ScanStatus};
use tenable_io::domain::users::{PermissionLevel, UserCreate};
use tenable_io::error::SdkError;

mod folders {
    use super::*;

    #[tokio::test]
    async fn test_list_unwraps_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/folders")
            .with_status(200)
            .with_body(
                r#"{"folders": [
                    {"unread_count": 0, "custom": 0, "default_tag": 1, "type": "main", "name": "My Scans", "id": 3},
                    {"unread_count": null, "custom": 0, "default_tag": 0, "type": "trash", "name": "Trash", "id": 2}
                ]}"#,
            )
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let folders = tio.folders().list().await.unwrap();

        mock.assert_async().await;
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].folder_type, FolderType::Main);
        assert_eq!(folders[1].folder_type, FolderType::Trash);
    }

    #[tokio::test]
    async fn test_edit_and_delete() {
        let mut server = mockito::Server::new_async().await;
        let edit = server
            .mock("PUT", "/folders/12")
            .match_body(Matcher::Json(json!({"name": "Renamed"})))
            .with_status(200)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/folders/12")
            .with_status(200)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        tio.folders().edit(12, "Renamed").await.unwrap();
        tio.folders().delete(12).await.unwrap();

        edit.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name_without_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/folders")
            .expect(0)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let err = tio.folders().create("  ").await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, SdkError::Validation(_)));
    }
}

mod scans {
    use super::*;

    const TIMEZONES: &str = r#"{"timezones": [
        {"name": "UTC", "value": "Etc/UTC"},
        {"name": "US/Eastern", "value": "America/New_York"}
    ]}"#;

    #[tokio::test]
    async fn test_list_null_scans_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/scans")
            .match_query(Matcher::UrlEncoded("folder_id".into(), "3".into()))
            .with_status(200)
            .with_body(r#"{"folders": [], "scans": null, "timestamp": 1}"#)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let scans = tio.scans().list(Some(3), None).await.unwrap();

        mock.assert_async().await;
        assert!(scans.is_empty());
    }

    #[tokio::test]
    async fn test_list_since() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/scans")
            .match_query(Matcher::UrlEncoded(
                "last_modification_date".into(),
                "1545944400".into(),
            ))
            .with_status(200)
            .with_body(
                r#"{"scans": [{"id": 5, "name": "DMZ", "status": "running", "read": 0, "enabled": 1}]}"#,
            )
            .create_async()
            .await;

        let since = chrono::DateTime::from_timestamp(1_545_944_400, 0).unwrap();
        let tio = common::client(&server.url());
        let scans = tio.scans().list(None, Some(since)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(scans[0].status, ScanStatus::Running);
        assert!(scans[0].enabled);
    }

    #[tokio::test]
    async fn test_launch_with_alt_targets() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/scans/5/launch")
            .match_body(Matcher::Json(json!({"alt_targets": ["10.0.0.9"]})))
            .with_status(200)
            .with_body(r#"{"scan_uuid": "run-uuid-1"}"#)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let uuid = tio
            .scans()
            .launch(5, &["10.0.0.9".to_string()])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(uuid, "run-uuid-1");
    }

    #[tokio::test]
    async fn test_run_control_paths() {
        let mut server = mockito::Server::new_async().await;
        let pause = server.mock("POST", "/scans/5/pause").with_status(200).create_async().await;
        let resume = server.mock("POST", "/scans/5/resume").with_status(200).create_async().await;
        let stop = server.mock("POST", "/scans/5/stop").with_status(200).create_async().await;
        let read = server
            .mock("PUT", "/scans/5/status")
            .match_body(Matcher::Json(json!({"read": true})))
            .with_status(200)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        tio.scans().pause(5).await.unwrap();
        tio.scans().resume(5).await.unwrap();
        tio.scans().stop(5).await.unwrap();
        tio.scans().set_read_status(5, true).await.unwrap();

        pause.assert_async().await;
        resume.assert_async().await;
        stop.assert_async().await;
        read.assert_async().await;
    }

    #[tokio::test]
    async fn test_timezones_are_cached() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/scans/timezones")
            .with_status(200)
            .with_body(TIMEZONES)
            .expect(1)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let first = tio.timezones().await.unwrap();
        let second = tio.timezones().await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, vec!["Etc/UTC".to_string(), "America/New_York".to_string()]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_timezone_list_is_refetched() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/scans/timezones")
            .with_status(200)
            .with_body(r#"{"timezones": []}"#)
            .expect(2)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        assert!(tio.timezones().await.unwrap().is_empty());
        assert!(tio.timezones().await.unwrap().is_empty());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_validates_timezone() {
        let mut server = mockito::Server::new_async().await;
        let _zones = server
            .mock("GET", "/scans/timezones")
            .with_status(200)
            .with_body(TIMEZONES)
            .create_async()
            .await;
        let post = server
            .mock("POST", "/scans")
            .match_body(Matcher::PartialJson(json!({
                "uuid": "tmpl-basic",
                "settings": {"name": "Nightly", "timezone": "Etc/UTC", "enabled": true}
            })))
            .with_status(200)
            .with_body(r#"{"scan": {"id": 77, "name": "Nightly", "enabled": true}}"#)
            .expect(1)
            .create_async()
            .await;

        let tio = common::client(&server.url());

        let bad = ScanCreate::new("tmpl-basic", "Nightly")
            .targets(["10.0.0.0/24"])
            .schedule("Mars/Olympus", "FREQ=DAILY;INTERVAL=1", "20240101T030000");
        let err = tio.scans().create(&bad).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(ref m) if m.contains("timezone")));

        let good = ScanCreate::new("tmpl-basic", "Nightly")
            .targets(["10.0.0.0/24"])
            .schedule("Etc/UTC", "FREQ=DAILY;INTERVAL=1", "20240101T030000");
        let scan = tio.scans().create(&good).await.unwrap();

        post.assert_async().await;
        assert_eq!(scan.id, 77);
    }
}

mod agents {
    use super::*;

    #[tokio::test]
    async fn test_list_with_filters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/scanners/1/agents")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "50".into()),
                Matcher::UrlEncoded("offset".into(), "0".into()),
                Matcher::UrlEncoded("f".into(), "platform:match:LINUX".into()),
                Matcher::UrlEncoded("sort".into(), "name:asc".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"agents": [{"id": 7, "name": "web-01", "platform": "LINUX"}],
                    "pagination": {"total": 1, "limit": 50, "offset": 0}}"#,
            )
            .create_async()
            .await;

        let params = AgentListParams::new()
            .offset(0)
            .limit(50)
            .sort("name", "asc")
            .filter(AgentFilter::new("platform", "match", "LINUX"));
        let tio = common::client(&server.url());
        let page = tio
            .agents()
            .list(DEFAULT_AGENT_SCANNER, &params)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.agents[0].name, "web-01");
    }

    #[tokio::test]
    async fn test_unlink_and_groups() {
        let mut server = mockito::Server::new_async().await;
        let unlink = server
            .mock("DELETE", "/scanners/1/agents/7")
            .with_status(200)
            .create_async()
            .await;
        let add = server
            .mock("PUT", "/scanners/1/agent-groups/3/agents/7")
            .with_status(200)
            .create_async()
            .await;
        let groups = server
            .mock("GET", "/scanners/1/agent-groups")
            .with_status(200)
            .with_body(r#"{"groups": [{"id": 3, "name": "web", "agents_count": 1}]}"#)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        tio.agent_groups().add_agent(1, 3, 7).await.unwrap();
        let listed = tio.agent_groups().list(1).await.unwrap();
        tio.agents().unlink(1, 7).await.unwrap();

        add.assert_async().await;
        groups.assert_async().await;
        unlink.assert_async().await;
        assert_eq!(listed[0].agents_count, Some(1));
    }
}

mod assets {
    use super::*;

    #[tokio::test]
    async fn test_import() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/import/assets")
            .match_body(Matcher::Json(json!({
                "assets": [{"ipv4": ["192.168.1.10"], "netbios_name": "FILESRV"}],
                "source": "cmdb"
            })))
            .with_status(200)
            .with_body(r#"{"asset_import_job_uuid": "job-1"}"#)
            .create_async()
            .await;

        let asset = AssetImport {
            ipv4: vec!["192.168.1.10".into()],
            netbios_name: Some("FILESRV".into()),
            ..Default::default()
        };
        let tio = common::client(&server.url());
        let job = tio.assets().import(&[asset], "cmdb").await.unwrap();

        mock.assert_async().await;
        assert_eq!(job, "job-1");
    }

    #[tokio::test]
    async fn test_import_rejects_anonymous_asset() {
        let tio = common::client("http://127.0.0.1:9");
        let err = tio
            .assets()
            .import(&[AssetImport::default()], "cmdb")
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(ref m) if m.contains("asset 0")));
    }

    #[tokio::test]
    async fn test_details_encodes_uuid() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/assets/0a1b%2F2c")
            .with_status(200)
            .with_body(r#"{"info": {"uuid": "0a1b/2c"}}"#)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let details = tio.assets().details("0a1b/2c").await.unwrap();

        mock.assert_async().await;
        assert_eq!(details["info"]["uuid"], "0a1b/2c");
    }
}

mod users {
    use super::*;

    #[tokio::test]
    async fn test_create_and_disable() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/users")
            .match_body(Matcher::PartialJson(json!({
                "username": "jdoe@example.com", "permissions": 24, "type": "local"
            })))
            .with_status(200)
            .with_body(r#"{"id": 9, "username": "jdoe@example.com", "permissions": 24, "enabled": true}"#)
            .create_async()
            .await;
        let disable = server
            .mock("PUT", "/users/9/enabled")
            .match_body(Matcher::Json(json!({"enabled": false})))
            .with_status(200)
            .with_body(r#"{"id": 9, "username": "jdoe@example.com", "permissions": 24, "enabled": false}"#)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let user = tio
            .users()
            .create(&UserCreate::new("jdoe@example.com", "pw", PermissionLevel::ScanOperator))
            .await
            .unwrap();
        let user = tio.users().enabled(user.id, false).await.unwrap();

        create.assert_async().await;
        disable.assert_async().await;
        assert!(!user.enabled);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_permission() {
        let tio = common::client("http://127.0.0.1:9");
        let mut create = UserCreate::new("jdoe@example.com", "pw", PermissionLevel::BasicUser);
        create.permissions = 20;
        let err = tio.users().create(&create).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(ref m) if m.contains("permissions")));
    }
}

mod audit_log {
    use super::*;

    #[tokio::test]
    async fn test_events_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/audit-log/v1/events")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("f".into(), "date.gt:2018-01-01".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"events": [{"id": "e1", "action": "session.create", "is_failure": false}]}"#)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let events = tio
            .audit_log()
            .events(&[EventFilter::new("date", "gt", "2018-01-01")], Some(10))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(events[0].action, "session.create");
    }
}

mod session {
    use super::*;

    #[tokio::test]
    async fn test_gen_api_keys_rotates_client_keys() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/session/keys")
            .match_header("x-apikeys", "accessKey=ACCESS; secretKey=SECRET;")
            .with_status(200)
            .with_body(r#"{"accessKey": "NEWACCESS", "secretKey": "NEWSECRET"}"#)
            .create_async()
            .await;

        let after = server
            .mock("GET", "/session")
            .match_header("x-apikeys", "accessKey=NEWACCESS; secretKey=NEWSECRET;")
            .with_status(200)
            .with_body(r#"{"id": 1, "username": "admin@example.com"}"#)
            .expect(1)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        let other = tio.clone();
        let keys = tio.session().gen_api_keys().await.unwrap();
        let me = other.session().details().await.unwrap();

        mock.assert_async().await;
        after.assert_async().await;
        assert_eq!(keys.access_key(), "NEWACCESS");
        assert_eq!(keys.header_value(), "accessKey=NEWACCESS; secretKey=NEWSECRET;");
        assert_eq!(me.username, "admin@example.com");
    }

    #[tokio::test]
    async fn test_change_password_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/session/chpasswd")
            .match_body(Matcher::Json(json!({"password": "new", "current_password": "old"})))
            .with_status(200)
            .create_async()
            .await;

        let tio = common::client(&server.url());
        tio.session().change_password("old", "new").await.unwrap();

        mock.assert_async().await;
    }
}
