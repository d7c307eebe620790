//! End-to-end transfers through the JSON file stores
//!
//! Builds both stores from configuration, runs transfers and reads the
//! documents back from disk.

use mailroom::adapters::store::{create_data_stores, JsonFileMailContainerStore, MailContainerStore};
use mailroom::cli::commands::transfer::TransferArgs;
use mailroom::cli::{EXIT_DENIED, EXIT_OK};
use mailroom::config::{parse_config, MailroomConfig};
use mailroom::core::transfer::MailTransferService;
use mailroom::domain::{
    AllowedMailType, MailContainer, MailContainerNumber, MailContainerStatus, MailType,
    MakeMailTransferRequest,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    primary_path: PathBuf,
    backup_path: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let primary_path = dir.path().join("primary.json");
        let backup_path = dir.path().join("backup.json");

        seed(&primary_path, "primary", 20);
        seed(&backup_path, "backup", 8);

        Self {
            dir,
            primary_path,
            backup_path,
        }
    }

    fn config(&self, selector: &str) -> MailroomConfig {
        parse_config(&self.config_text(selector)).unwrap()
    }

    fn config_text(&self, selector: &str) -> String {
        format!(
            "[data_store]\ndata_store_type = \"{}\"\nbackend = \"json\"\nprimary_path = \"{}\"\nbackup_path = \"{}\"\n",
            selector,
            self.primary_path.display(),
            self.backup_path.display()
        )
    }

    fn write_config(&self, selector: &str) -> String {
        let path = self.dir.path().join("mailroom.toml");
        fs::write(&path, self.config_text(selector)).unwrap();
        path.to_string_lossy().to_string()
    }
}

fn seed(path: &Path, name: &str, capacity: i32) {
    let containers = vec![
        container("MC-LL", AllowedMailType::LARGE_LETTER, capacity),
        MailContainer {
            status: MailContainerStatus::NoTransfersIn,
            ..container("MC-SP", AllowedMailType::SMALL_PARCEL, capacity)
        },
    ];
    JsonFileMailContainerStore::new(name, path)
        .save_all(containers)
        .unwrap();
}

fn container(number: &str, allowed: AllowedMailType, capacity: i32) -> MailContainer {
    MailContainer::builder()
        .mail_container_number(number)
        .unwrap()
        .allowed_mail_type(allowed)
        .capacity(capacity)
        .build()
        .unwrap()
}

fn capacity_in(path: &Path, number: &str) -> Option<i32> {
    JsonFileMailContainerStore::new("check", path)
        .get_mail_container(&MailContainerNumber::new(number).unwrap())
        .unwrap()
        .map(|c| c.capacity)
}

fn request(number: &str, items: i32, mail_type: MailType) -> MakeMailTransferRequest {
    MakeMailTransferRequest::new(MailContainerNumber::new(number).unwrap(), items, mail_type)
}

#[test]
fn test_backup_transfer_updates_backup_document_only() {
    let fixture = Fixture::new();
    let config = fixture.config("Backup");
    let stores = create_data_stores(&config.data_store).unwrap();
    let service = MailTransferService::from_stores(&config, &stores).unwrap();

    let result = service
        .make_mail_transfer(&request("MC-LL", 5, MailType::LargeLetter))
        .unwrap();

    assert!(result.success());
    assert_eq!(capacity_in(&fixture.backup_path, "MC-LL"), Some(3));
    assert_eq!(capacity_in(&fixture.primary_path, "MC-LL"), Some(20));
}

#[test]
fn test_primary_transfer_updates_primary_document_only() {
    let fixture = Fixture::new();
    let config = fixture.config("Primary");
    let stores = create_data_stores(&config.data_store).unwrap();
    let service = MailTransferService::from_stores(&config, &stores).unwrap();

    let result = service
        .make_mail_transfer(&request("MC-LL", 20, MailType::LargeLetter))
        .unwrap();

    assert!(result.success());
    assert_eq!(capacity_in(&fixture.primary_path, "MC-LL"), Some(0));
    assert_eq!(capacity_in(&fixture.backup_path, "MC-LL"), Some(8));
}

#[test]
fn test_denied_transfer_leaves_document_unchanged() {
    let fixture = Fixture::new();
    let before = fs::read_to_string(&fixture.backup_path).unwrap();
    let config = fixture.config("Backup");
    let stores = create_data_stores(&config.data_store).unwrap();
    let service = MailTransferService::from_stores(&config, &stores).unwrap();

    // Backup holds 8, so 9 large letters exceed capacity
    let over = service
        .make_mail_transfer(&request("MC-LL", 9, MailType::LargeLetter))
        .unwrap();
    // Not operational
    let blocked = service
        .make_mail_transfer(&request("MC-SP", 1, MailType::SmallParcel))
        .unwrap();
    let missing = service
        .make_mail_transfer(&request("MC-NONE", 1, MailType::StandardLetter))
        .unwrap();

    assert!(!over.success());
    assert!(!blocked.success());
    assert!(!missing.success());
    assert_eq!(fs::read_to_string(&fixture.backup_path).unwrap(), before);
}

#[test]
fn test_successive_transfers_accumulate() {
    let fixture = Fixture::new();
    let config = fixture.config("Primary");
    let stores = create_data_stores(&config.data_store).unwrap();
    let service = MailTransferService::from_stores(&config, &stores).unwrap();

    for _ in 0..3 {
        assert!(service
            .make_mail_transfer(&request("MC-LL", 6, MailType::LargeLetter))
            .unwrap()
            .success());
    }
    // 2 left, so another 6 is refused
    assert!(!service
        .make_mail_transfer(&request("MC-LL", 6, MailType::LargeLetter))
        .unwrap()
        .success());

    assert_eq!(capacity_in(&fixture.primary_path, "MC-LL"), Some(2));
}

#[test]
fn test_cli_transfer_against_json_documents() {
    let fixture = Fixture::new();
    let config_path = fixture.write_config("Backup");

    let args = TransferArgs {
        from: "MC-LL".to_string(),
        items: 4,
        mail_type: "large-letter".to_string(),
        json: true,
        dry_run: false,
    };
    assert_eq!(args.execute(&config_path).unwrap(), EXIT_OK);
    assert_eq!(capacity_in(&fixture.backup_path, "MC-LL"), Some(4));

    let args = TransferArgs { items: 5, ..args };
    assert_eq!(args.execute(&config_path).unwrap(), EXIT_DENIED);
    assert_eq!(capacity_in(&fixture.backup_path, "MC-LL"), Some(4));
}

#[test]
fn test_cli_dry_run_does_not_touch_documents() {
    let fixture = Fixture::new();
    let config_path = fixture.write_config("Primary");
    let before = fs::read_to_string(&fixture.primary_path).unwrap();

    let args = TransferArgs {
        from: "MC-LL".to_string(),
        items: 3,
        mail_type: "large-letter".to_string(),
        json: false,
        dry_run: true,
    };

    assert_eq!(args.execute(&config_path).unwrap(), EXIT_OK);
    assert_eq!(fs::read_to_string(&fixture.primary_path).unwrap(), before);
}

#[test]
fn test_hand_written_document_is_readable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("containers.json");
    fs::write(
        &path,
        r#"{
  "containers": [
    {
      "mail_container_number": "MC-7",
      "allowed_mail_type": ["StandardLetter", "SmallParcel"],
      "capacity": -3
    }
  ]
}"#,
    )
    .unwrap();

    let store = JsonFileMailContainerStore::new("hand", &path);
    let container = store
        .get_mail_container(&MailContainerNumber::new("MC-7").unwrap())
        .unwrap()
        .unwrap();

    assert_eq!(
        container.allowed_mail_type,
        AllowedMailType::STANDARD_LETTER | AllowedMailType::SMALL_PARCEL
    );
    assert_eq!(container.capacity, -3);
    assert_eq!(container.status, MailContainerStatus::Operational);
}
