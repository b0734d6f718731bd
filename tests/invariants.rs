use chrono::{TimeZone, Utc};
use serde_json::json;

use datapackager::{
    CatalogSource, DatapackageError, PackageAssembler, PackageMetadata, PartitionFailure,
    PartitionKey, PartitionStrategy, RawFileRecord, ResourceBuilder, StaticCatalog,
};

fn record(name: &str) -> RawFileRecord {
    RawFileRecord::new(
        name,
        format!("https://zenodo.org/api/files/bucket/{name}"),
        1_000 + name.len() as u64,
        format!("{:032x}", name.len()),
    )
}

fn temporal_assembler() -> PackageAssembler {
    PackageAssembler::new(ResourceBuilder::new(PartitionStrategy::temporal()))
}

#[test]
fn single_year_run_yields_year_and_table_media_type() {
    let builder = ResourceBuilder::new(PartitionStrategy::temporal());
    let cases = [
        ("eia860_2019.zip", 2019, "application/zip"),
        (
            "eia860-2001.xlsx",
            2001,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
        ("eiawater_1999.xls", 1999, "application/vnd.ms-excel"),
        ("2015_annual.csv", 2015, "text/csv"),
    ];
    for (name, year, mediatype) in cases {
        let descriptor = builder.build_record(&record(name)).unwrap();
        assert_eq!(descriptor.parts, PartitionKey::year(year), "{name}");
        assert_eq!(descriptor.mediatype, mediatype, "{name}");
    }
}

#[test]
fn spatial_names_yield_year_and_verbatim_state() {
    let builder = ResourceBuilder::new(PartitionStrategy::temporal_spatial());
    for (name, year, state) in [
        ("epacems_2018-ca.csv", 2018, "ca"),
        ("epacems-1995-AL.zip", 1995, "AL"),
        ("epacems-2020-Ny.csv", 2020, "Ny"),
    ] {
        let descriptor = builder.build_record(&record(name)).unwrap();
        assert_eq!(descriptor.parts, PartitionKey::year_state(year, state), "{name}");
    }
}

#[test]
fn names_without_year_run_are_malformed() {
    let builder = ResourceBuilder::new(PartitionStrategy::temporal());
    for name in ["eia860.zip", "eia-19.csv", "data_123.zip", "eia860_20191.zip"] {
        let err = builder.build_record(&record(name)).unwrap_err();
        assert!(
            matches!(
                err,
                DatapackageError::MalformedFilename {
                    reason: PartitionFailure::Missing,
                    ..
                }
            ),
            "{name}: {err}"
        );
    }
}

#[test]
fn unknown_extensions_are_rejected() {
    let builder = ResourceBuilder::new(PartitionStrategy::temporal());
    for name in ["eia860_2019.rar", "eia860_2019.tar", "eia860_2019"] {
        let err = builder.build_record(&record(name)).unwrap_err();
        assert!(
            matches!(err, DatapackageError::UnknownFormat { .. }),
            "{name}: {err}"
        );
    }
}

#[test]
fn annual_zip_descriptor_serializes_to_frictionless_shape() {
    let builder = ResourceBuilder::new(PartitionStrategy::temporal());
    let descriptor = builder
        .build("eia860_2019.zip", "https://example.org/eia860_2019.zip", 42, "abc123")
        .unwrap();
    assert_eq!(
        serde_json::to_value(&descriptor).unwrap(),
        json!({
            "profile": "data-resource",
            "name": "eia860_2019.zip",
            "path": "https://example.org/eia860_2019.zip",
            "title": "eia860_2019",
            "parts": {"year": 2019},
            "encoding": "utf-8",
            "mediatype": "application/zip",
            "format": "zip",
            "bytes": 42,
            "hash": "abc123"
        })
    );
}

#[test]
fn assembled_resources_match_input_count_and_order() {
    let metadata = StaticCatalog::builtin()
        .get_catalog_metadata("eia860")
        .unwrap();
    let names = ["eia860-2005.zip", "eia860-2019.zip", "eia860-2010.zip", "eia860-2001.zip"];
    let records: Vec<RawFileRecord> = names.iter().map(|name| record(name)).collect();

    let document = temporal_assembler().assemble(&metadata, &records).unwrap();

    assert_eq!(document.resources.len(), records.len());
    let built: Vec<&str> = document.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(built, names);
}

#[test]
fn failing_record_aborts_without_partial_package() {
    let metadata = PackageMetadata::new("eia860", "EIA 860");
    let records = vec![
        record("eia860-2018.zip"),
        record("eia860-2019.rar"),
        record("eia860.zip"),
    ];
    let err = temporal_assembler().assemble(&metadata, &records).unwrap_err();
    assert!(matches!(
        err,
        DatapackageError::UnknownFormat { ref extension, .. } if extension == "rar"
    ));
}

#[test]
fn reused_metadata_is_not_mutated_across_calls() {
    let metadata = StaticCatalog::builtin()
        .get_catalog_metadata("eia860")
        .unwrap();
    let snapshot = metadata.clone();
    let records = vec![record("eia860-2018.zip"), record("eia860-2019.zip")];
    let assembler = temporal_assembler();

    let first_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let second_at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let first = assembler.assemble_at(&metadata, &records, first_at).unwrap();
    let second = assembler.assemble_at(&metadata, &records, second_at).unwrap();

    assert_eq!(metadata, snapshot);
    assert_eq!(first.resources, second.resources);
    assert_ne!(first.created, second.created);

    let mut realigned = second.clone();
    realigned.created = first.created;
    assert_eq!(first, realigned);
}

#[test]
fn created_is_stamped_per_call() {
    let metadata = PackageMetadata::new("x", "X");
    let before = Utc::now();
    let first = temporal_assembler()
        .assemble(&metadata, Vec::<RawFileRecord>::new())
        .unwrap();
    let second = temporal_assembler()
        .assemble(&metadata, Vec::<RawFileRecord>::new())
        .unwrap();
    assert!(first.created >= before);
    assert!(second.created >= first.created);
}

#[test]
fn document_json_copies_metadata_fields_and_formats_created() {
    let metadata = StaticCatalog::builtin()
        .get_catalog_metadata("epacems")
        .unwrap();
    let created = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
    let assembler = PackageAssembler::new(
        ResourceBuilder::new(PartitionStrategy::temporal_spatial()).with_remote_url(true),
    );
    let document = assembler
        .assemble_at(&metadata, [record("epacems-2019-wy.csv")], created)
        .unwrap();
    let value = document.to_json_value().unwrap();

    assert_eq!(value["name"], "epacems");
    assert_eq!(value["profile"], "data-package");
    assert_eq!(value["homepage"], metadata.homepage.as_str());
    assert_eq!(value["created"], "2021-03-04T05:06:07.000000+00:00");
    assert_eq!(value["licenses"].as_array().unwrap().len(), 2);
    assert_eq!(
        value["keywords"].as_array().unwrap().len(),
        metadata.keywords.len()
    );
    let resource = &value["resources"][0];
    assert_eq!(resource["parts"], json!({"year": 2019, "state": "wy"}));
    assert_eq!(resource["remote_url"], resource["path"]);

    let pretty = document.to_json_string_pretty().unwrap();
    assert!(pretty.contains("\"resources\""));
}

#[test]
fn ambiguous_year_runs_abort_assembly() {
    let metadata = PackageMetadata::new("eia860", "EIA 860");
    let err = temporal_assembler()
        .assemble(&metadata, [record("eia860-2018-rev2019.zip")])
        .unwrap_err();
    match err {
        DatapackageError::MalformedFilename {
            reason: PartitionFailure::Ambiguous { matches },
            ..
        } => assert_eq!(matches, vec!["2018", "2019"]),
        other => panic!("unexpected error: {other}"),
    }
}
