#[test]
fn compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/basic_pass.rs");
    t.pass("tests/ui/lazy_pass.rs");
    t.pass("tests/ui/empty_pass.rs");
}
