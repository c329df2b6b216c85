use ast::*;
use converter::{
    classify_source, convert, transduce, ConversionOptions, FlowConstruct, FlowConstructFinder,
    PathPrefixBuckets, PragmaClassification, StatsCollector,
};
use ecma_visit::{Visit, VisitWith};
use parser::Syntax;
use pretty_assertions::assert_eq;

fn parse(src: &str) -> parser::ParsedProgram {
    parser::parse(src, Syntax::default()).unwrap()
}

const FLOW_SAMPLES: &[&str] = &[
    "// @flow\ntype T = ?string;",
    "// @flow\nconst x = 1;",
    "const y = 2;",
    "/* $FlowFixMe */\nfoo();",
    "export type A = {| +a: ?number, -b: Array<*> |};",
    "function f(x: mixed): boolean %checks { return !!x; }",
];

#[test]
fn classification_is_idempotent() {
    for src in FLOW_SAMPLES {
        assert_eq!(classify_source(src).unwrap(), classify_source(src).unwrap(), "{}", src);
    }
}

#[test]
fn code_without_flow_is_unchanged() {
    let sources = [
        "const a = b < c && d > e;\n",
        "// leading\nfunction f(x, y = 1, ...rest) {\n  return x ?? y?.z;\n}\n",
        "class A extends B {\n  static x = 1\n  #p = 2\n  m() { return this.#p }\n}\n",
        "const el = <div className=\"a\">{items.map(i => <Item key={i} />)}</div>;\n",
        "import a, { b as c } from 'd';\nexport default async function* g() { yield await a; }\n",
        "const s = `a${b}c`, r = /x+/gi;  /* trailing */\n",
    ];
    for src in sources {
        let out = convert(src, &ConversionOptions::default()).unwrap();
        assert_eq!(out.code, src);
        assert!(out.diagnostics.is_empty());
    }
}

const EVERY_CONSTRUCT: &str = "// @flow
import typeof T from 't';
import d, { typeof U, v } from 'u';
import { type W } from 'w';
export type A<+X: B = C, -Y> = {| +a: ?mixed, -b: empty, [K]: *, ...D, [[slot]]: bool |};
export opaque type O: string = string;
declare export class E mixins M { +p: $ReadOnlyArray<?T>; m(string, ...Array<number>): void }
declare export default (x: number) => void;
declare export var v: $Keys<typeof obj>;
declare module.exports: { f: Class<E> };
const f = (x: any): boolean %checks => !!(x: $FlowFixMe);
type F = (string, ?number) => $Values<T>;
type G = T?.['a']['b'];
type H = $Diff<A, B> & $Shape<A> & $Exact<B> & $ObjMap<A, F>;
declare module 'm' {
  declare function g(): void;
  declare export type Z = ?Object;
}
type I = ?$Keys<O> | $Subtype<$Keys<O>> | $ElementType<T, K>?.['a'];
function g<T: Object>(x: T) { return (x: Object); }
";

fn both_modes() -> [ConversionOptions; 2] {
    [
        ConversionOptions::default(),
        ConversionOptions {
            inline_utility_types: true,
            ..Default::default()
        },
    ]
}

#[test]
fn no_flow_construct_survives() {
    let src = EVERY_CONSTRUCT;
    for options in both_modes() {
        let t = transduce(src, parse(src), &options);
        assert_eq!(FlowConstructFinder::find(&t.program), vec![]);
    }
}

/// Flow syntax which can still be told apart in printed TypeScript.
fn flow_residue(code: &str) -> Vec<String> {
    let mut found = vec![];
    for word in code.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        if word.starts_with('$')
            || ["mixed", "empty", "bool", "opaque", "mixins", "checks"].contains(&word)
        {
            found.push(word.to_string());
        }
    }
    for token in ["{|", "|}", "*"] {
        if code.contains(token) {
            found.push(token.to_string());
        }
    }
    // A `?` where a type starts is a maybe type.
    let mut prev = ' ';
    for c in code.chars() {
        if c == '?' && ":<,(=|&".contains(prev) {
            found.push("?".to_string());
        }
        if !c.is_whitespace() {
            prev = c;
        }
    }
    found
}

#[test]
fn no_flow_syntax_is_printed() {
    for options in both_modes() {
        let out = convert(EVERY_CONSTRUCT, &options).unwrap();
        assert_eq!(flow_residue(&out.code), Vec::<String>::new(), "{}", out.code);
        assert!(
            out.code
                .ends_with("function g<T extends object>(x: T) { return (x as object); }\n"),
            "{}",
            out.code
        );
    }
}

#[test]
fn nested_rewrites_keep_the_surrounding_code() {
    let sources = [
        ("const x = 1;\ntype A = ?$Keys<O>;\nconst y = 2;", "type A = keyof O | null | undefined;"),
        ("const x = 1;\nfunction f<T: Object>(x: T) {}", "function f<T extends object>(x: T) {}"),
        ("const x = 1;\nconst a = (x: Object);", "const a = (x as object);"),
        ("const x = 1;\ntype A = $Subtype<$Keys<O>>;", "type A = keyof O;"),
        ("const x = 1;\ntype A = $ElementType<T, K>?.['a'];", "type A = NonNullable<T[K]>['a'];"),
    ];
    for (src, converted) in sources {
        let code = convert(src, &ConversionOptions::default()).unwrap().code;
        let mut lines = code.lines();
        assert_eq!(lines.next(), Some("const x = 1;"), "{}", code);
        assert_eq!(lines.next(), Some(converted), "{}", code);
        assert!(flow_residue(&code).is_empty(), "{}", code);
    }
}

/// Counts maybe types, and unions having both `null` and `undefined`.
#[derive(Default)]
struct Nullables {
    maybe: usize,
    unions: usize,
}

impl Visit for Nullables {
    fn visit_type(&mut self, n: &Type) {
        match n {
            Type::Nullable(..) => self.maybe += 1,
            Type::Union(u) => {
                let has = |kind: KeywordKind| {
                    u.types
                        .iter()
                        .any(|t| matches!(&**t, Type::Keyword(k) if k.kind == kind))
                };
                if has(KeywordKind::Null) && has(KeywordKind::Undefined) {
                    self.unions += 1;
                }
            }
            _ => {}
        }
        n.visit_children_with(self)
    }
}

#[test]
fn maybe_types_become_unions_at_any_depth() {
    let src = "type A = ?Array<?{ a: ?(?string)[], b: (?number) => ?Map<?K, ?V> }>;";
    let mut before = Nullables::default();
    parse(src).program.visit_with(&mut before);
    assert_eq!(before.maybe, 8);

    let t = transduce(src, parse(src), &ConversionOptions::default());
    let mut after = Nullables::default();
    t.program.visit_with(&mut after);
    assert_eq!(after.maybe, 0);
    assert_eq!(after.unions, before.maybe);

    let out = convert(src, &ConversionOptions::default()).unwrap();
    assert!(!out.code.contains('?'), "{}", out.code);
    assert_eq!(out.code.matches("| null | undefined").count(), 8);
}

#[test]
fn each_exact_object_is_reported_once() {
    let sources = [
        ("type S = {| a: number |};", 1),
        ("type S = {| a: {| b: number |}, c: Array<{| d: string |}> |};", 3),
        ("type S = $ReadOnly<{| a: number |}>;", 1),
        ("type S = { a: number };", 0),
    ];
    for (src, exact) in sources {
        let out = convert(src, &ConversionOptions::default()).unwrap();
        let reported = out
            .diagnostics
            .iter()
            .filter(|d| d.construct == FlowConstruct::ExactObject)
            .count();
        assert_eq!(reported, exact, "{}", src);
    }
}

#[test]
fn bucket_sum_is_the_number_of_typed_files() {
    let files = [
        ("src/a/one.js", "// @flow\ntype T = number;"),
        ("src/a/two.js", "// @flow\nconst x = 1;"),
        ("src/b/three.js", "export type U = string;"),
        ("src/b/four.js", "const y = 1;"),
        ("lib/five.js", "// @flow\nexport interface I {}"),
        ("six.js", "declare var z: number;"),
        ("lib/broken.js", "type = ;"),
    ];
    for segments in [0, 1, 2, 3] {
        let buckets = PathPrefixBuckets { segments };
        let mut collector = StatsCollector::new(|p: &str| buckets.bucket(p));
        let mut typed = 0;
        for (path, src) in files {
            if classify_source(src).ok() == Some(PragmaClassification::FlowAnnotatedWithTypes) {
                typed += 1;
            }
            collector.add::<String>(path, Ok(src));
        }
        let report = collector.finish();
        assert_eq!(typed, 4);
        assert_eq!(report.bucket_total(), typed);
        assert_eq!(report.value(converter::stats::TYPED_FLOW_FILES), typed);
    }
}
