use crate::html::tags::{TagAttr, encode_html, make_end_tag, make_start_tag};
use crate::html::{HtmlParts, RenderOptions};
use crate::insert::InsertValue;
use crate::ops::DeltaInsertOp;
use crate::sanitize::OpAttributes;
use crate::value_types::{AttrEnum, NEW_LINE, ScriptType};

/// Tag chosen for a block op.
#[derive(Debug, Clone, Copy)]
enum BlockTag {
    Fixed(&'static str),
    ListItem,
    Header,
    Paragraph,
}

/// Block attributes in priority order; the first one present picks the tag
/// and the rest only contribute CSS classes.
static BLOCK_TAGS: &[(fn(&OpAttributes) -> bool, BlockTag)] = &[
    (|a| a.blockquote, BlockTag::Fixed("blockquote")),
    (|a| a.code_block, BlockTag::Fixed("pre")),
    (|a| a.list.is_some(), BlockTag::ListItem),
    (|a| a.header.is_some(), BlockTag::Header),
    (|a| a.align.is_some(), BlockTag::Paragraph),
    (|a| a.direction.is_some(), BlockTag::Paragraph),
    (|a| a.indent.is_some(), BlockTag::Paragraph),
];

/// Inline formats, outermost first. Every one present adds a tag.
static INLINE_TAGS: &[fn(&OpAttributes) -> Option<&'static str>] = &[
    |a| a.link.as_ref().map(|_| "a"),
    |a| {
        a.script.map(|s| match s {
            ScriptType::Sub => "sub",
            ScriptType::Super => "sup",
        })
    },
    |a| a.bold.then_some("strong"),
    |a| a.italic.then_some("em"),
    |a| a.strike.then_some("s"),
    |a| a.underline.then_some("u"),
];

/// Renders a single op. Never fails: anything unexpected degrades to empty
/// tags or content.
pub struct OpToHtmlConverter<'a> {
    op: &'a DeltaInsertOp,
    options: &'a RenderOptions,
}

impl<'a> OpToHtmlConverter<'a> {
    pub fn new(op: &'a DeltaInsertOp, options: &'a RenderOptions) -> Self {
        Self { op, options }
    }

    pub fn prefix_class(&self, class_name: &str) -> String {
        if self.options.class_prefix.is_empty() {
            return class_name.to_string();
        }
        format!("{}-{class_name}", self.options.class_prefix)
    }

    pub fn get_html(&self) -> String {
        self.get_html_parts().to_html()
    }

    pub fn get_html_parts(&self) -> HtmlParts {
        if self.op.is_just_newline() && !self.op.is_container_block() {
            return HtmlParts {
                content: NEW_LINE.to_string(),
                ..Default::default()
            };
        }

        let mut tags = self.get_tags();
        let attrs = self.get_tag_attributes();
        if tags.is_empty() && !attrs.is_empty() {
            tags.push("span".to_string());
        }

        let mut opening_tag = String::new();
        for (i, tag) in tags.iter().enumerate() {
            // attributes go on the outermost tag only
            let tag_attrs: &[TagAttr] = if i == 0 { &attrs } else { &[] };
            opening_tag.push_str(&make_start_tag(tag, tag_attrs));
        }
        let closing_tag = tags
            .iter()
            .rev()
            .filter(|tag| *tag != "img")
            .map(|tag| make_end_tag(tag))
            .collect();

        HtmlParts {
            opening_tag,
            content: self.get_content(),
            closing_tag,
        }
    }

    pub fn get_content(&self) -> String {
        if self.op.is_container_block() {
            return String::new();
        }

        let content = match &self.op.insert {
            InsertValue::Mention(payload) => payload.field("name").unwrap_or_default(),
            InsertValue::Text(s) | InsertValue::Formula(s) => s.clone(),
            InsertValue::Image(_) | InsertValue::Video(_) | InsertValue::File(_) => {
                return String::new();
            }
        };

        if self.options.encode_html {
            encode_html(&content)
        } else {
            content
        }
    }

    pub fn get_css_classes(&self) -> Vec<String> {
        let a = &self.op.attributes;
        let mut classes = Vec::new();

        if let Some(indent) = a.indent {
            classes.push(format!("indent-{indent}"));
        }
        if let Some(align) = a.align {
            classes.push(format!("align-{}", align.as_str()));
        }
        if let Some(direction) = a.direction {
            classes.push(format!("direction-{}", direction.as_str()));
        }
        if let Some(font) = &a.font {
            classes.push(format!("font-{font}"));
        }
        if let Some(size) = &a.size {
            classes.push(format!("size-{size}"));
        }

        match self.op.insert {
            InsertValue::Formula(_) => classes.push("formula".to_string()),
            InsertValue::Video(_) => classes.push("video".to_string()),
            InsertValue::Image(_) => classes.push("image".to_string()),
            _ => {}
        }

        classes.iter().map(|c| self.prefix_class(c)).collect()
    }

    pub fn get_css_styles(&self) -> Vec<String> {
        let a = &self.op.attributes;
        if a.code {
            return Vec::new();
        }

        let mut styles = Vec::new();
        if let Some(background) = &a.background {
            styles.push(format!("background-color:{background}"));
        }
        if let Some(color) = &a.color {
            styles.push(format!("color:{color}"));
        }
        styles
    }

    pub fn get_tag_attributes(&self) -> Vec<TagAttr> {
        if self.op.attributes.code {
            return Vec::new();
        }

        let classes = self.get_css_classes();
        let class_attr = |extra: Option<&str>| {
            let joined: Vec<&str> = classes.iter().map(String::as_str).chain(extra).collect();
            (!joined.is_empty()).then(|| TagAttr::new("class", joined.join(" ")))
        };
        let mut attrs: Vec<TagAttr> = Vec::new();

        match &self.op.insert {
            InsertValue::Image(src) => {
                attrs.extend(class_attr(None));
                attrs.push(TagAttr::new("src", crate::sanitize::scrub_url(src)));
                return attrs;
            }
            InsertValue::Formula(_) => {
                attrs.extend(class_attr(None));
                return attrs;
            }
            _ if self.op.is_container_block() => {
                attrs.extend(class_attr(None));
                return attrs;
            }
            InsertValue::Video(src) => {
                attrs.extend(class_attr(None));
                attrs.push(TagAttr::new("frameborder", "0"));
                attrs.push(TagAttr::new("allowfullscreen", "true"));
                attrs.push(TagAttr::new("src", crate::sanitize::scrub_url(src)));
                return attrs;
            }
            InsertValue::Mention(payload) => {
                attrs.extend(class_attr(Some("mention")));
                if let Some(user) = payload.field("user") {
                    attrs.push(TagAttr::new("data-user", user));
                }
                if let Some(name) = payload.field("name") {
                    attrs.push(TagAttr::new("data-name", name));
                }
                return attrs;
            }
            InsertValue::Text(_) | InsertValue::File(_) => {}
        }

        attrs.extend(class_attr(None));
        let styles = self.get_css_styles();
        if !styles.is_empty() {
            attrs.push(TagAttr::new("style", styles.join(";")));
        }
        if self.op.is_link() {
            if let Some(link) = &self.op.attributes.link {
                attrs.push(TagAttr::new("href", link.as_str()));
            }
        }
        attrs
    }

    pub fn get_tags(&self) -> Vec<String> {
        let a = &self.op.attributes;

        if a.code {
            return vec!["code".to_string()];
        }

        match self.op.insert {
            InsertValue::Video(_) => return vec!["iframe".to_string()],
            InsertValue::Image(_) => return vec!["img".to_string()],
            InsertValue::Formula(_) | InsertValue::Mention(_) | InsertValue::File(_) => {
                return vec!["span".to_string()];
            }
            InsertValue::Text(_) => {}
        }

        if let Some((_, block)) = BLOCK_TAGS.iter().find(|(present, _)| present(a)) {
            return vec![self.block_tag(*block)];
        }

        INLINE_TAGS
            .iter()
            .filter_map(|tag_for| tag_for(a))
            .map(str::to_string)
            .collect()
    }

    fn block_tag(&self, block: BlockTag) -> String {
        let or_default = |configured: &str, default: &str| {
            if configured.is_empty() {
                default.to_string()
            } else {
                configured.to_string()
            }
        };
        match block {
            BlockTag::Fixed(tag) => tag.to_string(),
            BlockTag::ListItem => or_default(&self.options.list_item_tag, "li"),
            BlockTag::Header => format!("h{}", self.op.attributes.header.unwrap_or(1)),
            BlockTag::Paragraph => or_default(&self.options.paragraph_tag, "p"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::convert;
    use serde_json::{Value, json};

    fn single(insert: Value, attributes: Value) -> DeltaInsertOp {
        convert(&json!([{"insert": insert, "attributes": attributes}]))
            .pop()
            .unwrap()
    }

    fn html(op: &DeltaInsertOp) -> String {
        OpToHtmlConverter::new(op, &RenderOptions::default()).get_html()
    }

    #[test]
    fn prefix_class() {
        let op = single(json!("x"), json!(null));
        let opts = RenderOptions::default();
        assert_eq!(
            OpToHtmlConverter::new(&op, &opts).prefix_class("video"),
            "ql-video"
        );
        let bare = RenderOptions {
            class_prefix: String::new(),
            ..Default::default()
        };
        assert_eq!(
            OpToHtmlConverter::new(&op, &bare).prefix_class("video"),
            "video"
        );
    }

    #[test]
    fn css_classes_follow_property_order() {
        let op = single(
            json!({"formula": "x"}),
            json!({"size": "large", "font": "serif", "direction": "rtl", "align": "right", "indent": 2}),
        );
        let opts = RenderOptions::default();
        assert_eq!(
            OpToHtmlConverter::new(&op, &opts).get_css_classes(),
            [
                "ql-indent-2",
                "ql-align-right",
                "ql-direction-rtl",
                "ql-font-serif",
                "ql-size-large",
                "ql-formula"
            ]
        );
    }

    #[test]
    fn css_styles() {
        let opts = RenderOptions::default();
        let op = single(json!("x"), json!({"color": "#f00", "background": "#0f0"}));
        assert_eq!(
            OpToHtmlConverter::new(&op, &opts).get_css_styles(),
            ["background-color:#0f0", "color:#f00"]
        );
        let code = single(json!("x"), json!({"color": "#f00", "code": true}));
        assert!(OpToHtmlConverter::new(&code, &opts).get_css_styles().is_empty());
    }

    #[test]
    fn block_tag_priority() {
        let opts = RenderOptions::default();
        let cases = [
            (json!({"blockquote": true, "code-block": true, "list": "bullet"}), "blockquote"),
            (json!({"code-block": true, "list": "bullet", "header": 1}), "pre"),
            (json!({"list": "ordered", "header": 2}), "li"),
            (json!({"header": 3, "align": "center"}), "h3"),
            (json!({"align": "center", "direction": "rtl"}), "p"),
            (json!({"direction": "rtl"}), "p"),
            (json!({"indent": 4}), "p"),
        ];
        for (attrs, expected) in cases {
            let op = single(json!("\n"), attrs);
            assert_eq!(OpToHtmlConverter::new(&op, &opts).get_tags(), [expected]);
        }
    }

    #[test]
    fn configured_block_tags() {
        let opts = RenderOptions {
            list_item_tag: "div".into(),
            paragraph_tag: "section".into(),
            ..Default::default()
        };
        let item = single(json!("\n"), json!({"list": "bullet"}));
        assert_eq!(OpToHtmlConverter::new(&item, &opts).get_tags(), ["div"]);
        let para = single(json!("\n"), json!({"align": "center"}));
        assert_eq!(OpToHtmlConverter::new(&para, &opts).get_tags(), ["section"]);
    }

    #[test]
    fn inline_tags_nest_in_fixed_order() {
        let opts = RenderOptions::default();
        let op = single(
            json!("x"),
            json!({"underline": true, "strike": true, "italic": true, "bold": true, "script": "super", "link": "http://a"}),
        );
        assert_eq!(
            OpToHtmlConverter::new(&op, &opts).get_tags(),
            ["a", "sup", "strong", "em", "s", "u"]
        );
    }

    #[test]
    fn attributes_attach_to_outermost_tag() {
        let op = single(
            json!("go"),
            json!({"link": "http://a.b/c", "bold": true, "color": "#333", "font": "serif"}),
        );
        assert_eq!(
            html(&op),
            r#"<a class="ql-font-serif" style="color:#333" href="http://a.b/c"><strong>go</strong></a>"#
        );
    }

    #[test]
    fn code_suppresses_everything_else() {
        let op = single(
            json!("let x = 1;"),
            json!({"code": true, "bold": true, "color": "#fff", "link": "http://a"}),
        );
        assert_eq!(html(&op), "<code>let x = 1;</code>");
    }

    #[test]
    fn styled_text_without_tags_gets_span() {
        let op = single(json!("hi"), json!({"background": "#ff0"}));
        assert_eq!(
            html(&op),
            r#"<span style="background-color:#ff0">hi</span>"#
        );
    }

    #[test]
    fn bare_newline_short_circuits() {
        let op = single(json!("\n"), json!({"bold": true}));
        let parts = OpToHtmlConverter::new(&op, &RenderOptions::default()).get_html_parts();
        assert_eq!(
            parts,
            HtmlParts {
                opening_tag: String::new(),
                content: "\n".into(),
                closing_tag: String::new(),
            }
        );
    }

    #[test]
    fn container_block_has_empty_content() {
        let op = single(json!("\n"), json!({"header": 2, "align": "center"}));
        let parts = OpToHtmlConverter::new(&op, &RenderOptions::default()).get_html_parts();
        assert_eq!(parts.opening_tag, r#"<h2 class="ql-align-center">"#);
        assert_eq!(parts.content, "");
        assert_eq!(parts.closing_tag, "</h2>");
    }

    #[test]
    fn text_is_escaped_unless_disabled() {
        let op = single(json!("<b>&</b>"), json!(null));
        assert_eq!(html(&op), "&lt;b&gt;&amp;&lt;&#x2F;b&gt;");
        let raw = RenderOptions {
            encode_html: false,
            ..Default::default()
        };
        assert_eq!(OpToHtmlConverter::new(&op, &raw).get_html(), "<b>&</b>");
    }

    #[test]
    fn mention_renders_name_and_data_attributes() {
        let op = single(json!({"mention": {"name": "Ann", "user": "u-1"}}), json!(null));
        assert_eq!(
            html(&op),
            r#"<span class="mention" data-user="u-1" data-name="Ann">Ann</span>"#
        );
    }

    #[test]
    fn file_embed_renders_empty_span() {
        let op = single(json!({"file": {"url": "f.pdf"}}), json!(null));
        assert_eq!(html(&op), "<span></span>");
    }
}
