use super::*;
use crate::{format::print_direct, parse_source, FlowConstructFinder};
use pretty_assertions::assert_eq;

fn run(src: &str, options: &ConversionOptions) -> Transduced {
    transduce(src, parse_source(src).unwrap(), options)
}

fn ts(src: &str) -> String {
    let t = run(src, &ConversionOptions::default());
    print_direct(src, &t.rewrites, 4).unwrap()
}

fn ts_inline(src: &str) -> String {
    let options = ConversionOptions {
        inline_utility_types: true,
        ..Default::default()
    };
    let t = run(src, &options);
    print_direct(src, &t.rewrites, 4).unwrap()
}

fn reported(src: &str) -> Vec<FlowConstruct> {
    run(src, &ConversionOptions::default())
        .diagnostics
        .into_iter()
        .map(|d| d.construct)
        .collect()
}

#[test]
fn nullable() {
    assert_eq!(ts("type A = ?string;"), "type A = string | null | undefined;");
    assert_eq!(
        ts("type L = Array<?string>;"),
        "type L = Array<string | null | undefined>;"
    );
    assert_eq!(
        ts("type I = A & ?B;"),
        "type I = A & (B | null | undefined);"
    );
    assert_eq!(
        ts("let f: ?(x: number) => void;"),
        "let f: ((x: number) => void) | null | undefined;"
    );
    assert_eq!(
        ts("function f(x: ?number): ?string {}"),
        "function f(x: number | null | undefined): string | null | undefined {}"
    );
}

#[test]
fn nested_nullable_is_flattened() {
    assert_eq!(ts("type A = ?(?string);"), "type A = string | null | undefined;");
    assert_eq!(
        ts("type B = ?(number | null | undefined);"),
        "type B = number | null | undefined;"
    );
    let t = run("type A = ?(?string);", &ConversionOptions::default());
    match &t.program.body[0] {
        ModuleItem::Stmt(Stmt::Decl(Decl::TypeAlias(a))) => match &*a.type_ann {
            Type::Union(u) => assert_eq!(u.types.len(), 3),
            ty => panic!("{:?}", ty),
        },
        item => panic!("{:?}", item),
    }
}

#[test]
fn replaced_types_keep_their_position() {
    assert_eq!(
        ts("const x = 1;\ntype A = ?$Keys<O>;\nconst y = 2;"),
        "const x = 1;\ntype A = keyof O | null | undefined;\nconst y = 2;"
    );
    assert_eq!(
        ts("const x = 1;\ntype A = $Subtype<$Keys<O>>;"),
        "const x = 1;\ntype A = keyof O;"
    );
    assert_eq!(
        ts("type A = $ElementType<T, K>?.['a'];"),
        "type A = NonNullable<T[K]>['a'];"
    );
    assert_eq!(
        ts("type A = Array<?$Exact<B>>;"),
        "type A = Array<B | null | undefined>;"
    );
}

#[test]
fn nullable_tree_is_a_union() {
    let t = run("type A = ?(B | C);", &ConversionOptions::default());
    match &t.program.body[0] {
        ModuleItem::Stmt(Stmt::Decl(Decl::TypeAlias(a))) => match &*a.type_ann {
            Type::Union(u) => assert_eq!(u.types.len(), 3),
            ty => panic!("{:?}", ty),
        },
        item => panic!("{:?}", item),
    }
}

#[test]
fn keywords() {
    assert_eq!(
        ts("type K = [mixed, empty, bool, Function, Object];"),
        "type K = [unknown, never, boolean, Function, object];"
    );
    assert_eq!(ts("type E = Array<*>;"), "type E = Array<any>;");
    assert_eq!(reported("type E = Array<*>;"), vec![FlowConstruct::Existential]);
}

#[test]
fn objects() {
    assert_eq!(ts("type C = {| a: number |};"), "type C = { a: number };");
    assert_eq!(ts("type D = { a: number, ... };"), "type D = { a: number };");
    assert_eq!(
        ts("type O = { f(): void, +g: number, -h: string, ...};"),
        "type O = { f(): void, readonly g: number, h: string };"
    );
    assert_eq!(
        ts("type P = {\n    a: number,\n    ...\n};"),
        "type P = {\n    a: number\n};"
    );
    assert_eq!(
        ts("type B = { +a: mixed, -b: bool };"),
        "type B = { readonly a: unknown, b: boolean };"
    );
    assert_eq!(ts("type M = { [string]: number };"), "type M = { [key: string]: number };");
    assert_eq!(ts("type N = { [K]: V };"), "type N = Record<K, V>;");
    assert_eq!(ts("type S = { ...A, b: string };"), "type S = A & { b: string };");
}

#[test]
fn one_diagnostic_per_exact_object() {
    assert_eq!(
        reported("type C = {| a: {| b: number |} |};"),
        vec![FlowConstruct::ExactObject, FlowConstruct::ExactObject]
    );
    assert_eq!(reported("type C = { a: number, ... };"), vec![]);
}

#[test]
fn utility_types() {
    assert_eq!(ts("type K = $Keys<O>;"), "type K = keyof O;");
    assert_eq!(ts("type V = $Values<O>;"), "type V = O[keyof O];");
    assert_eq!(ts("type R = $ReadOnly<{| a: number |}>;"), "type R = Readonly<{ a: number }>;");
    assert_eq!(ts("type P = $Shape<O>;"), "type P = Partial<O>;");
    assert_eq!(ts("type D = $Diff<A, B>;"), "type D = Omit<A, keyof B>;");
    assert_eq!(ts("type P = $PropertyType<T, 'k'>;"), "type P = T['k'];");
    assert_eq!(ts("type N = $NonMaybeType<T>;"), "type N = NonNullable<T>;");
    assert_eq!(ts("type A = $ReadOnlyArray<T>;"), "type A = ReadonlyArray<T>;");
    assert_eq!(ts("type E = $Exact<T>;"), "type E = T;");
    assert_eq!(ts("let x: $FlowFixMe;"), "let x: any;");
    assert_eq!(ts("type C = $Call<F>;"), "type C = ReturnType<F>;");
    assert_eq!(
        ts("type M = $KeyMirror<O>;"),
        "type M = { [K in keyof O]: K };"
    );
    assert_eq!(
        ts("type C = Class<T>;"),
        "type C = new (...args: any[]) => T;"
    );
    assert_eq!(ts("let n: React.Node;"), "let n: React.ReactNode;");
    assert_eq!(
        ts("let e: React.Element<typeof Button>;"),
        "let e: React.ReactElement<React.ComponentProps<typeof Button>>;"
    );
}

#[test]
fn unsupported_utility_becomes_any() {
    assert_eq!(ts("type K = $Keys<A, B>;"), "type K = any;");
    assert_eq!(reported("type K = $Keys<A, B>;"), vec![FlowConstruct::UtilityType]);
}

#[test]
fn inline_utility_types() {
    assert_eq!(
        ts_inline("type R = $ReadOnly<{ a: number }>;"),
        "type R = { readonly a: number };"
    );
    assert_eq!(ts_inline("type P = $Shape<{ a: number }>;"), "type P = { a?: number };");
    assert_eq!(
        ts_inline("type P = $Shape<O>;"),
        "type P = { [K in keyof O]?: O[K] };"
    );
    assert_eq!(
        ts_inline("type D = $Diff<{ a: number, b: string }, { b: string }>;"),
        "type D = { a: number };"
    );
    assert_eq!(ts_inline("type N = $NonMaybeType<A | null | void>;"), "type N = A;");
}

#[test]
fn mapped_key_avoids_names_in_use() {
    assert_eq!(
        ts_inline("type R = $ReadOnly<K>;"),
        "type R = { readonly [Key in keyof K]: K[Key] };"
    );
}

#[test]
fn functions() {
    assert_eq!(
        ts("type F = (string, number) => void;"),
        "type F = (arg0: string, arg1: number) => void;"
    );
    assert_eq!(ts("type G = string => void;"), "type G = (arg0: string) => void;");
    assert_eq!(
        ts("type H = (...Array<string>) => void;"),
        "type H = (...rest: Array<string>) => void;"
    );
    assert_eq!(ts("type T = (x: number) => void;"), "type T = (x: number) => void;");
}

#[test]
fn type_params() {
    assert_eq!(
        ts("type Box<+T: Base = Default> = T;"),
        "type Box<T extends Base = Default> = T;"
    );
    assert_eq!(
        ts("let a;\nfunction f<T: Object>(x: T) {}"),
        "let a;\nfunction f<T extends object>(x: T) {}"
    );
    assert_eq!(reported("type Box<+T, -U> = T;"), vec![
        FlowConstruct::Variance,
        FlowConstruct::Variance
    ]);
}

#[test]
fn casts_and_predicates() {
    assert_eq!(ts("const a = (b: any);"), "const a = (b as any);");
    assert_eq!(
        ts("let a;\nconst b = (a: Object);"),
        "let a;\nconst b = (a as object);"
    );
    assert_eq!(
        ts("function isStr(x: mixed): boolean %checks { return typeof x === 'string'; }"),
        "function isStr(x: unknown): boolean { return typeof x === 'string'; }"
    );
    assert_eq!(reported("const a = (b: any);"), vec![]);
}

#[test]
fn optional_indexed_access() {
    assert_eq!(ts("type O = T?.['a'];"), "type O = NonNullable<T>['a'];");
    assert_eq!(reported("type O = T?.['a'];"), vec![FlowConstruct::OptionalIndexedAccess]);
}

#[test]
fn opaque_types() {
    assert_eq!(ts("opaque type Id: string = number;"), "type Id = number;");
    assert_eq!(ts("export opaque type Id = string;"), "export type Id = string;");
    assert_eq!(ts("declare opaque type Id: string;"), "declare type Id = string;");
    assert_eq!(ts("declare opaque type Id;"), "declare type Id = unknown;");
    assert_eq!(reported("opaque type Id = string;"), vec![FlowConstruct::OpaqueType]);
}

#[test]
fn declare_export() {
    assert_eq!(
        ts("declare export function f(x: number): string;"),
        "export declare function f(x: number): string;"
    );
    assert_eq!(
        ts("declare export var x: number;"),
        "export declare var x: number;"
    );
    assert_eq!(ts("declare export type T = string;"), "export type T = string;");
    assert_eq!(ts("declare export * from 'm';"), "export * from 'm';");
}

#[test]
fn module_exports() {
    assert_eq!(
        ts("declare module.exports: { a: number };"),
        "declare const moduleExports: { a: number };\nexport = moduleExports;"
    );
    assert_eq!(
        ts("declare export default string;"),
        "declare const _default: string;\nexport default _default;"
    );
}

#[test]
fn ambient_modules() {
    let src = "declare module 'm' {
  declare var x: number;
  declare export function f(): void;
  declare module.exports: { a: number };
}";
    assert_eq!(
        ts(src),
        "declare module 'm' {
  var x: number;
  export function f(): void;
  const moduleExports: { a: number };
  export = moduleExports;
}"
    );
}

#[test]
fn declare_class() {
    let src = "declare class A extends B mixins M { static s: number; m(string): void; (): void; }\nlet x = 1;";
    let out = ts(src);
    assert!(out.starts_with("declare class A extends B {"), "{}", out);
    assert!(out.contains("static s: number;"), "{}", out);
    assert!(out.contains("m(arg0: string): void;"), "{}", out);
    assert!(!out.contains("mixins"), "{}", out);
    assert!(out.ends_with("}\nlet x = 1;"), "{}", out);
    assert_eq!(
        reported(src),
        vec![FlowConstruct::Mixins, FlowConstruct::FunctionType]
    );
}

#[test]
fn typeof_imports() {
    assert_eq!(
        ts("import typeof Foo from './foo';"),
        "type Foo = typeof import('./foo')['default'];"
    );
    assert_eq!(
        ts("import { typeof A, B } from \"m\";"),
        "import { B } from \"m\";\ntype A = typeof import(\"m\")[\"A\"];"
    );
    assert_eq!(
        ts("import typeof * as NS from 'm';"),
        "type NS = typeof import('m');"
    );
}

#[test]
fn type_only_imports_are_kept() {
    let src = "import type { A } from 'a';\nimport { type B, c } from 'b';\nexport type { A };";
    assert_eq!(ts(src), src);
}

#[test]
fn plain_code_is_untouched() {
    let src = "// comment\nconst a = b < c && d > e;\nfunction f(x) {\n  return x;\n}\n";
    let t = run(src, &ConversionOptions::default());
    assert!(t.rewrites.is_empty());
    assert!(t.diagnostics.is_empty());
}

#[test]
fn nothing_flow_survives() {
    let src = "// @flow
import typeof T from 't';
type A<+X: B> = {| +a: ?mixed, [string]: *, ...C |};
opaque type O = string;
declare class D mixins M { [[call]](): void }
declare export default string;
const f = (x: any): boolean %checks => !!(x: bool);
type F = (string) => $Keys<T>;
type G = T?.['a'];
";
    let t = run(src, &ConversionOptions::default());
    assert_eq!(FlowConstructFinder::find(&t.program), vec![]);
}
