use serde::Serialize;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Serialize)]
pub struct ListInfoJson {
    pub name: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Plain output helpers
// ---------------------------------------------------------------------------

/// Print a list's items, numbered the way `rm` expects them
pub fn print_items(name: &str, items: &[String]) {
    if items.is_empty() {
        println!("{name}: (empty)");
        return;
    }
    println!("{name}:");
    for (i, item) in items.iter().enumerate() {
        println!("{:>3}  {}", i + 1, item);
    }
}
