pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; box-sizing: border-box; padding: 12px; gap: 8px; font-family: sans-serif;"
}

pub fn toolbar_style() -> &'static str {
    "display: flex; align-items: center; gap: 8px;"
}

pub fn banner_style() -> &'static str {
    "color: #555; font-size: 13px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #bbb;"
}

pub fn table_style() -> &'static str {
    "border-collapse: collapse; width: max-content; min-width: 100%;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f0f0f0; border: 1px solid #bbb; padding: 4px 8px; text-align: left;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px;"
}

pub fn cell_value_style() -> &'static str {
    "min-height: 1.2em; padding-left: 24px; padding-right: 24px; cursor: pointer;"
}

pub fn cell_input_style(rejected: bool) -> &'static str {
    if rejected {
        "width: 100%; box-sizing: border-box; border: 1px solid #d33;"
    } else {
        "width: 100%; box-sizing: border-box;"
    }
}

pub fn cell_error_style() -> &'static str {
    "color: #d33; font-size: 12px;"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_header_styles_include_positioning() {
        let style = table_header_cell_style();

        assert!(style.contains("position: sticky"));
        assert!(style.contains("top: 0"));
    }

    #[test]
    fn table_container_style_allows_scroll() {
        let style = table_container_style();

        assert!(style.contains("overflow: auto"));
        assert!(style.contains("flex: 1"));
    }

    #[test]
    fn root_container_style_uses_viewport_height_and_flex() {
        let style = root_container_style();

        assert!(style.contains("height: 100vh"));
        assert!(style.contains("flex-direction: column"));
    }

    #[test]
    fn rejected_input_is_highlighted() {
        assert!(cell_input_style(true).contains("#d33"));
        assert!(!cell_input_style(false).contains("#d33"));
    }
}
