/// Lays a flat input vector out as a grid, `width` values per line.
pub fn format_input_grid(inputs: &[f64], width: usize) -> String {
    let mut s = String::new();
    for (i, value) in inputs.iter().enumerate() {
        s.push_str(&format!("{} ", value));
        if width > 0 && (i + 1) % width == 0 {
            s.push('\n');
        }
    }
    s
}
