#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{Value, json};

/// Prefix of every module identity in the fixtures. Passed as `--root` so
/// traces print `./test/targets/...`.
pub const WORK: &str = "/work";

fn id(target: &str, file: &str) -> String {
    format!("{WORK}/test/targets/{target}/{file}")
}

fn lodash() -> String {
    format!("{WORK}/node_modules/lodash/lodash.js")
}

/// Stats dumps mirroring small webpack builds.
///
///   green:  index.js imports nothing
///   red:    index.js -> lodash
///   red2:   index.js -> import1.js -> lodash
///           index.js -> import2.js -> import2.1.js -> lodash
///   yellow: index.js -> import("lodash"), lodash lands in a lazy chunk
pub fn stats_json(target: &str) -> Value {
    let index = id(target, "index.js");
    let entry = json!({ "identity": index, "request": format!("./test/targets/{target}/index.js"), "reasons": [{ "module": null }] });
    match target {
        "red" => json!({
            "chunks": [{ "name": "test", "files": ["test.js"], "modules": [index, lodash(), "/work/node_modules/webpack/global.js", "/work/node_modules/webpack/module.js"] }],
            "modules": [
                entry,
                { "identity": lodash(), "request": "lodash", "reasons": [{ "module": index }] },
                { "identity": "/work/node_modules/webpack/global.js", "request": "(webpack)/buildin/global.js", "reasons": [{ "module": lodash() }] },
                { "identity": "/work/node_modules/webpack/module.js", "request": "(webpack)/buildin/module.js", "reasons": [{ "module": lodash() }] },
            ]
        }),
        "red2" => {
            let import1 = id(target, "import1.js");
            let import2 = id(target, "import2.js");
            let import21 = id(target, "import2.1.js");
            json!({
                "chunks": [{ "name": "test", "files": ["test.js"], "modules": [index, import1, import2, import21, lodash()] }],
                "modules": [
                    entry,
                    { "identity": import1, "request": "./import1", "reasons": [{ "module": index }] },
                    { "identity": import2, "request": "./import2", "reasons": [{ "module": index }] },
                    { "identity": import21, "request": "./import2.1", "reasons": [{ "module": import2 }] },
                    { "identity": lodash(), "request": "lodash", "reasons": [{ "module": import1 }, { "module": import21 }] },
                ]
            })
        }
        "yellow" => json!({
            "chunks": [
                { "name": "test", "files": ["test.js"], "modules": [index] },
                { "name": "0", "files": ["0.bundle.js"], "modules": [lodash()] },
            ],
            "modules": [
                entry,
                { "identity": lodash(), "request": "lodash", "reasons": [{ "module": index }] },
            ]
        }),
        _ => json!({
            "chunks": [{ "name": "test", "files": ["test.js"], "modules": [index] }],
            "modules": [entry]
        }),
    }
}

/// A stats dump written to a temporary directory.
pub struct TestStats {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl TestStats {
    /// Caller must keep the returned value alive (dropping `TempDir`
    /// deletes the file).
    pub fn new(target: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, stats_json(target).to_string()).unwrap();
        Self { dir, path }
    }

    pub fn write_config(&self, toml: &str) -> PathBuf {
        let path = self.dir.path().join("restrict.toml");
        std::fs::write(&path, toml).unwrap();
        path
    }
}
