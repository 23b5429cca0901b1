use lsf::{parse_to_json, parse_to_value, walk, Navigator, Visitor};
use rstest::rstest;
use serde_json::json;

fn to_json(input: &str) -> Option<String> {
    parse_to_json(input.as_bytes()).unwrap()
}

#[rstest]
#[case("$f~Name$v~X", r#"{"Name":"X"}"#)]
#[case("$o~$f~items$v~A$v~B$v~C", r#"{"items":["A","B","C"]}"#)]
#[case("$o~$f~n$v~100$t~n$f~b$v~true$t~b$f~z$v~$t~z", r#"{"n":100,"b":true,"z":null}"#)]
#[case("$o~$f~id$v~1$t~n$o~$f~id$v~2$t~n", r#"[{"id":1},{"id":2}]"#)]
#[case("$o~$f~bad$v~abc$t~n", r#"{"bad":null}"#)]
#[case("$o~$f~ok$v~TRUE$t~b$f~no$v~False$t~b$f~huh$v~yes$t~b", r#"{"ok":true,"no":false,"huh":null}"#)]
#[case("$o~$f~x$v~-1.25e3$t~f$f~y$v~01$t~n$f~z$v~1.$t~f", r#"{"x":-1.25e3,"y":null,"z":null}"#)]
#[case("$o~$f~gone$v~ignored$t~z", r#"{"gone":null}"#)]
#[case("$o~$f~huge$v~1e400$t~n$f~tiny$v~-1e999$t~f", r#"{"huge":null,"tiny":null}"#)]
#[case("$o~$f~s$v~42$t~s$f~raw$v~42", r#"{"s":"42","raw":"42"}"#)]
fn renders_documents(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_json(input).as_deref(), Some(expected));
}

#[rstest]
fn empty_input_renders_nothing() {
    assert_eq!(to_json(""), None);
    assert_eq!(to_json("no markers at all"), None);
    assert_eq!(parse_to_value(b"").unwrap(), None);
}

#[rstest]
fn strings_are_escaped() {
    let json = to_json("$o~$f~say \"hi\"$v~a\\b\nc\td\u{1}").unwrap();
    assert_eq!(json, r#"{"say \"hi\"":"a\\b\nc\td\u0001"}"#);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, json!({"say \"hi\"": "a\\b\nc\td\u{1}"}));
}

#[rstest]
fn json_text_and_value_agree() {
    let input = b"$o~$f~name$v~Ada$f~age$v~37$t~n$f~tags$v~a$v~b$f~none\
        $f~huge$v~1e400$t~n$f~small$v~1e-3$t~f$o~$f~id$v~2$t~n";
    let text = parse_to_json(input).unwrap().unwrap();
    let from_text: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(Some(from_text), parse_to_value(input).unwrap());
}

#[rstest]
fn invalid_utf8_is_replaced() {
    let json = parse_to_json(b"$o~$f~k$v~a\xffb").unwrap().unwrap();
    assert_eq!(json, "{\"k\":\"a\u{fffd}b\"}");
}

/// Counts values per field, as an example of a visitor other than JSON.
#[derive(Default)]
struct FieldSizes {
    current: Option<String>,
    sizes: Vec<(String, usize)>,
}

impl<'a> Visitor<'a> for FieldSizes {
    fn begin_object(&mut self, _nav: &Navigator<'a>, _index: usize) {}

    fn end_object(&mut self, _nav: &Navigator<'a>, _index: usize) {}

    fn begin_field(&mut self, nav: &Navigator<'a>, index: usize) {
        self.current = Some(nav.text_of(index).into_owned());
        self.sizes.push((nav.text_of(index).into_owned(), 0));
    }

    fn end_field(&mut self, _nav: &Navigator<'a>, _index: usize) {
        self.current = None;
    }

    fn begin_array(&mut self, _len: usize) {}

    fn end_array(&mut self) {}

    fn absent(&mut self) {}

    fn value(&mut self, _nav: &Navigator<'a>, _index: usize) {
        if let Some((_, count)) = self.sizes.last_mut() {
            *count += 1;
        }
    }
}

#[rstest]
fn custom_visitor_sees_every_value() {
    let dom = lsf::parse_to_dom(b"$o~$f~a$v~1$f~b$f~c$v~x$v~y$v~z").unwrap();
    let mut sizes = FieldSizes::default();
    walk(&dom.navigator(), &mut sizes);
    assert_eq!(
        sizes.sizes,
        vec![("a".to_string(), 1), ("b".to_string(), 0), ("c".to_string(), 3)]
    );
    assert!(sizes.current.is_none());
}
