//! Integration tests for the harness: files on disk in, printed text out.

use std::fs;
use std::path::Path;

use insta::assert_snapshot;
use saltmill::{run, Cli, HarnessError};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_to_string(cli: &Cli) -> Result<String, HarnessError> {
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn rendered_part(output: &str) -> &str {
    output.split_once("Template:\n").unwrap().1
}

#[test]
fn renders_context_and_template() {
    let dir = TempDir::new().unwrap();
    let pillar = write(
        dir.path(),
        "ctx.json",
        r#"{"name": "bob", "roles": ["admin", "dev", "admin"]}"#,
    );
    let template = write(
        dir.path(),
        "user.j2",
        "{{ name }}: {{ roles | unique | sort | join(',') }} {{ 'nonexistent' | to_bool }}",
    );

    let out = run_to_string(&Cli {
        pillar: Some(pillar),
        template: Some(template),
        ..Cli::default()
    })
    .unwrap();

    assert!(out.starts_with("Pillar data:\n\t"));
    assert!(out.contains("\tname: bob"));
    assert_snapshot!(rendered_part(&out).trim_end(), @"bob: admin,dev False");
}

#[test]
fn includes_resolve_next_to_the_template() {
    let dir = TempDir::new().unwrap();
    let pillar = write(dir.path(), "ctx.yaml", "host: web01\n");
    write(dir.path(), "header.j2", "# {{ host | upper }}");
    let template = write(
        dir.path(),
        "main.j2",
        "{% include 'header.j2' %}\nid={{ host | uuid }}",
    );

    let out = run_to_string(&Cli {
        pillar: Some(pillar),
        template: Some(template),
        ..Cli::default()
    })
    .unwrap();

    let rendered = rendered_part(&out);
    assert!(rendered.starts_with("# WEB01\nid="));
    assert_eq!(rendered.trim_end().len(), "# WEB01\nid=".len() + 36);
}

#[test]
fn malformed_context_still_renders() {
    let dir = TempDir::new().unwrap();
    let pillar = write(dir.path(), "bad.yaml", "name: [unclosed\n");
    let template = write(dir.path(), "t.j2", "[{{ name }}] {{ name | to_bool }}");

    let out = run_to_string(&Cli {
        pillar: Some(pillar),
        template: Some(template),
        ..Cli::default()
    })
    .unwrap();

    assert!(out.starts_with("Pillar data:\n\t~\nTemplate:\n"));
    assert_snapshot!(rendered_part(&out).trim_end(), @"[] False");
}

#[test]
fn missing_context_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = run_to_string(&Cli {
        pillar: Some(dir.path().join("missing.yaml")),
        ..Cli::default()
    })
    .unwrap_err();
    assert!(matches!(err, HarnessError::Read { .. }));
}

#[test]
fn missing_template_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let pillar = write(dir.path(), "ctx.yaml", "a: 1\n");
    let err = run_to_string(&Cli {
        pillar: Some(pillar),
        template: Some(dir.path().join("missing.j2")),
        ..Cli::default()
    })
    .unwrap_err();
    assert!(matches!(err, HarnessError::Template(_)));
}

#[test]
fn fatal_filter_error_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let pillar = write(dir.path(), "ctx.yaml", "nums: []\n");
    let template = write(dir.path(), "t.j2", "{{ nums | max }}");
    let err = run_to_string(&Cli {
        pillar: Some(pillar),
        template: Some(template),
        ..Cli::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("empty sequence"));
}

#[test]
fn namespace_flag_changes_ids() {
    let dir = TempDir::new().unwrap();
    let pillar = write(dir.path(), "ctx.yaml", "{}\n");
    let template = write(dir.path(), "t.j2", "{{ 'example' | uuid }}");

    let default = run_to_string(&Cli {
        pillar: Some(pillar.clone()),
        template: Some(template.clone()),
        ..Cli::default()
    })
    .unwrap();
    assert_eq!(
        rendered_part(&default).trim_end(),
        "9ade8beb-355a-50d8-9011-1c99848a7719"
    );

    let dns = run_to_string(&Cli {
        pillar: Some(pillar),
        template: Some(template),
        namespace: Some(uuid::Uuid::NAMESPACE_DNS),
        ..Cli::default()
    })
    .unwrap();
    assert_eq!(
        rendered_part(&dns).trim_end(),
        "7cb48787-6d91-5b9f-bc60-f30298ea5736"
    );
}

#[test]
fn demo_renders_every_filter_family() {
    let out = run_to_string(&Cli {
        demo: true,
        ..Cli::default()
    })
    .unwrap();
    let rendered = rendered_part(&out);

    for line in [
        "user bob (3addde33-31a3-5bc8-a64a-880587a54caf)",
        "  enabled:   True",
        "  debug:     False",
        "  login:     /bin/bash\n",
        "  motd:      echo 'it",
        "  roles:     admin, dev",
        "  all:       admin, dev, wheel",
        "  shared:    dev",
        "  only:      admin, wheel",
        "  load:      min=0.5 max=1.5 avg=1.0",
        "  release:   3006.4",
        "  codename:  sulfur",
        "  base pkgs: vim git",
        "  install git\n  install gcc",
    ] {
        assert!(rendered.contains(line), "missing {line:?} in:\n{rendered}");
    }
}

#[test]
fn demo_flag_overrides_paths() {
    let out = run_to_string(&Cli {
        demo: true,
        pillar: Some("does/not/exist.yaml".into()),
        template: Some("does/not/exist.j2".into()),
        ..Cli::default()
    })
    .unwrap();
    assert!(rendered_part(&out).starts_with("user bob"));
}
