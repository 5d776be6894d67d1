use std::fs;
use std::path::Path;

#[allow(dead_code)]
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `app/{main,util}.py` and `app/sub/x.py`, both directories marked as packages.
#[allow(dead_code)]
pub fn app_tree(root: &Path) {
    write(root, "app/__init__.py", "");
    write(root, "app/main.py", "import app.util\nfrom app.sub import *\n");
    write(root, "app/util.py", "import os\n");
    write(root, "app/sub/__init__.py", "");
    write(root, "app/sub/x.py", "");
}
