use crate::{
    class::Class,
    expr::Expr,
    function::Function,
    ident::Ident,
    lit::Str,
    module::ModuleItem,
    pat::Pat,
    types::{FnType, InterfaceExtends, ObjectType, Predicate, Type, TypeAnn, TypeParamDecl},
};
use global_common::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Class(ClassDecl),
    Fn(FnDecl),
    Var(VarDecl),
    /// `type A = B`
    TypeAlias(TypeAliasDecl),
    /// Flow `opaque type A: S = B`
    OpaqueType(OpaqueTypeDecl),
    /// `interface I {}`
    Interface(InterfaceDecl),
    /// `declare function f(x: T): R;`
    DeclareFn(DeclareFnDecl),
    /// Flow `declare class C { ... }` whose body is an object type.
    DeclareClass(DeclareClassDecl),
    /// `declare module 'm' { ... }`
    Module(AmbientModuleDecl),
    /// Flow `declare module.exports: T`
    DeclareModuleExports(DeclareModuleExports),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub span: Span,
    pub ident: Ident,
    pub declare: bool,
    pub function: Function,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub span: Span,
    pub ident: Ident,
    pub declare: bool,
    pub class: Class,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub span: Span,
    pub kind: VarDeclKind,
    pub declare: bool,
    pub decls: Vec<VarDeclarator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarDeclKind {
    /// `var`
    Var,
    /// `let`
    Let,
    /// `const`
    Const,
}

impl VarDeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarDeclKind::Var => "var",
            VarDeclKind::Let => "let",
            VarDeclKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclarator {
    pub span: Span,
    pub name: Pat,

    /// Initialization expression.
    pub init: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    pub span: Span,
    pub declare: bool,
    pub id: Ident,
    pub type_params: Option<TypeParamDecl>,
    pub type_ann: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueTypeDecl {
    pub span: Span,
    pub declare: bool,
    pub id: Ident,
    pub type_params: Option<TypeParamDecl>,
    /// `: S`
    pub supertype: Option<Box<Type>>,
    /// `= T`, absent in libdefs.
    pub impltype: Option<Box<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub span: Span,
    pub declare: bool,
    pub id: Ident,
    pub type_params: Option<TypeParamDecl>,
    pub extends: Vec<InterfaceExtends>,
    pub body: ObjectType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclareFnDecl {
    pub span: Span,
    pub declare: bool,
    pub id: Ident,
    /// Signature; `fn_type.span` covers the parameter list through the return
    /// type.
    pub fn_type: FnType,
    pub predicate: Option<Predicate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclareClassDecl {
    pub span: Span,
    /// False after `declare export` and inside ambient modules.
    pub declare: bool,
    pub id: Ident,
    pub type_params: Option<TypeParamDecl>,
    pub extends: Option<InterfaceExtends>,
    pub mixins: Vec<InterfaceExtends>,
    pub implements: Vec<InterfaceExtends>,
    pub body: ObjectType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientModuleDecl {
    pub span: Span,
    pub declare: bool,
    pub id: ModuleName,
    pub body: Vec<ModuleItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleName {
    Str(Str),
    Ident(Ident),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclareModuleExports {
    pub span: Span,
    pub type_ann: TypeAnn,
}

spanned!(
    FnDecl,
    ClassDecl,
    VarDecl,
    VarDeclarator,
    TypeAliasDecl,
    OpaqueTypeDecl,
    InterfaceDecl,
    DeclareFnDecl,
    DeclareClassDecl,
    AmbientModuleDecl,
    DeclareModuleExports,
);
spanned_enum!(Decl {
    Class,
    Fn,
    Var,
    TypeAlias,
    OpaqueType,
    Interface,
    DeclareFn,
    DeclareClass,
    Module,
    DeclareModuleExports
});
spanned_enum!(ModuleName { Str, Ident });
enum_from!(Decl {
    Class(ClassDecl),
    Fn(FnDecl),
    Var(VarDecl),
    TypeAlias(TypeAliasDecl),
    OpaqueType(OpaqueTypeDecl),
    Interface(InterfaceDecl),
    DeclareFn(DeclareFnDecl),
    DeclareClass(DeclareClassDecl),
    Module(AmbientModuleDecl),
    DeclareModuleExports(DeclareModuleExports),
});
