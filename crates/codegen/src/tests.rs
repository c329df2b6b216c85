use super::*;
use parser::Syntax;
use std::fmt::{self, Debug, Display, Formatter};

fn parse_then_emit(from: &str, cfg: Config) -> String {
    let parsed = match parser::parse(from, Syntax::default()) {
        Ok(parsed) => parsed,
        Err(err) => panic!("failed to parse {:?}: {}", from, err),
    };
    to_code(&parsed.program, from, Some(&parsed.comments), cfg).unwrap()
}

#[track_caller]
fn test_from_to(from: &str, expected: &str) {
    test_from_to_custom_config(from, expected, Default::default())
}

#[track_caller]
fn test_identical(from: &str) {
    test_from_to(from, from)
}

#[track_caller]
fn test_from_to_custom_config(from: &str, to: &str, cfg: Config) {
    let out = parse_then_emit(from, cfg);

    assert_eq!(DebugUsingDisplay(out.trim()), DebugUsingDisplay(to.trim()),);
}

#[test]
fn imports_and_exports() {
    test_from_to(
        "import React, {useState, type Node} from 'react'
import typeof T from './t'
import * as ns from 'ns'
import 'side-effect'
export * as all from 'all'
export {a as b} from 'c'
export type {T}",
        r#"import React, { useState, type Node } from "react";
import typeof T from "./t";
import * as ns from "ns";
import "side-effect";
export * as all from "all";
export { a as b } from "c";
export type { T };"#,
    );
}

#[test]
fn flow_types_keep_their_syntax() {
    test_identical(
        "type A = ?string;
type B = {| a: number; b?: string |};
type C = { +a: number; ... };
type F = (string, number) => void;
type G = (A | B)[];
opaque type H: string = string;
function f<T: Base>(x: mixed): boolean %checks {
    return !!x;
}",
    );
}

#[test]
fn type_parens_are_added_for_synthesized_types() {
    let union = Type::union(vec![
        Type::reference("A", vec![]),
        Type::reference("B", vec![]),
    ]);
    let array = Type::Array(ArrayType {
        span: DUMMY_SP,
        elem_type: Box::new(union.clone()),
    });
    let intersection = Type::intersection(vec![union, Type::reference("C", vec![])]);

    let out = print_with(Config::fragment(4), "", |e| {
        e.emit_type(&array)?;
        e.emit_type(&intersection)
    })
    .unwrap();
    assert_eq!(out, "(A | B)[](A | B) & C");
}

#[test]
fn declare_forms() {
    test_from_to(
        "declare class Foo extends Bar { static x: number, m(): void }
declare export function f(x: number): string;
declare module.exports: { a: number };
declare export default string;",
        "declare class Foo extends Bar {
    static x: number;
    m(): void;
}
declare export function f(x: number): string;
declare module.exports: { a: number };
declare export default string;",
    );
}

#[test]
fn breaks_long_object() {
    test_from_to(
        "const o = {alpha: 'aaaaaaaaaaaaaaaaaaaa', beta: 'bbbbbbbbbbbbbbbbbbbbbbbbb', gamma: 'ccccccccccccccccc'};",
        r#"const o = {
    alpha: "aaaaaaaaaaaaaaaaaaaa",
    beta: "bbbbbbbbbbbbbbbbbbbbbbbbb",
    gamma: "ccccccccccccccccc",
};"#,
    );
}

#[test]
fn keeps_object_broken_after_open_brace() {
    test_from_to(
        "const o = {
  a: 1 };",
        "const o = {
    a: 1,
};",
    );
}

#[test]
fn zero_print_width_never_breaks() {
    let src = "const o = {alpha: 'aaaaaaaaaaaaaaaaaaaa', beta: 'bbbbbbbbbbbbbbbbbbbbbbbbb', gamma: 'ccccccccccccccccc'};";
    test_from_to_custom_config(
        src,
        r#"const o = { alpha: "aaaaaaaaaaaaaaaaaaaa", beta: "bbbbbbbbbbbbbbbbbbbbbbbbb", gamma: "ccccccccccccccccc" };"#,
        Config {
            print_width: 0,
            ..Default::default()
        },
    );
}

#[test]
fn hugs_trailing_callback() {
    test_from_to(
        "describe('x', function () { it('y', () => {}); });",
        r#"describe("x", function () {
    it("y", () => {});
});"#,
    );
}

#[test]
fn comments_and_blank_lines() {
    test_identical(
        "// lead
const a = 1; // trail

/* block */
foo();

function f() {
    // inside
}",
    );
}

#[test]
fn arrow_parens_avoid() {
    test_from_to_custom_config(
        "const f = (x) => x; const g = (x: number) => x;",
        "const f = x => x;\nconst g = (x: number) => x;",
        Config {
            arrow_parens: ArrowParens::Avoid,
            ..Default::default()
        },
    );
}

#[test]
fn no_semicolons_guards_statement_start() {
    test_from_to_custom_config(
        "const a = 1;\n[1].forEach(f);\nclass A { x = 1; [k]() {} }",
        "const a = 1\n;[1].forEach(f)\nclass A {\n    x = 1;\n    [k]() {}\n}",
        Config {
            semicolons: false,
            ..Default::default()
        },
    );
}

#[test]
fn quotes() {
    test_from_to_custom_config(
        r#"const s = "it's"; const t = "a";"#,
        r#"const s = "it's";
const t = 'a';"#,
        Config {
            single_quote: true,
            ..Default::default()
        },
    );
    test_from_to_custom_config(
        r#"const t = 'a';"#,
        r#"const t = 'a';"#,
        Config {
            preserve_quotes: true,
            ..Default::default()
        },
    );
}

#[test]
fn jsx_is_kept() {
    test_identical(r#"const el = <div className="a">{/* c */}<b>hi</b></div>;"#);
}

#[test]
fn statements() {
    test_identical(
        "if (a) {
    b();
} else if (c) d();
else {
    e();
}
for (let i = 0; i < n; i++) {}
for (const k in o) {}
for (const x of xs) {}
while (x) x--;
do {
    y();
} while (y);
switch (v) {
    case 1:
        break;
    default: {
        z();
    }
}
try {
    t();
} catch (e) {} finally {
    u();
}",
    );
}

struct DebugUsingDisplay<'a>(&'a str);

impl<'a> Debug for DebugUsingDisplay<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.0, f)
    }
}

impl PartialEq for DebugUsingDisplay<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
