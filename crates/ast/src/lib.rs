#![deny(unreachable_patterns)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

pub use self::{
    class::{Class, ClassMember, ClassMethod, ClassProp, Key, MethodKind},
    decl::{
        AmbientModuleDecl, ClassDecl, Decl, DeclareClassDecl, DeclareFnDecl,
        DeclareModuleExports, FnDecl, InterfaceDecl, ModuleName, OpaqueTypeDecl, TypeAliasDecl,
        VarDecl, VarDeclKind, VarDeclarator,
    },
    expr::{
        ArrayLit, ArrowExpr, AsExpr, AssignExpr, AwaitExpr, BinExpr, BlockStmtOrExpr, CallExpr,
        Callee, ClassExpr, CondExpr, Expr, ExprOrSpread, ExprOrSuper, FnExpr, Import, MemberExpr,
        MemberProp, MetaPropExpr, NewExpr, ObjectLit, ParenExpr, PropOrSpread, SeqExpr,
        SpreadElement, Super, TaggedTpl, ThisExpr, Tpl, TplElement, TypeCastExpr, UnaryExpr,
        UpdateExpr, YieldExpr,
    },
    function::{Function, Param},
    ident::{BindingIdent, Ident, PrivateName},
    jsx::{
        JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXClosingElement,
        JSXClosingFragment, JSXElement, JSXElementChild, JSXElementName, JSXEmptyExpr, JSXExpr,
        JSXExprContainer, JSXFragment, JSXMemberExpr, JSXNamespacedName, JSXObject,
        JSXOpeningElement, JSXOpeningFragment, JSXSpreadChild, JSXText,
    },
    lit::{BigInt, Bool, Lit, Null, Number, Regex, Str},
    module::{ModuleItem, Program},
    module_decl::{
        DeclareExportDefaultType, DefaultDecl, ExportAll, ExportAssignment, ExportDecl,
        ExportDefaultDecl, ExportDefaultExpr, ExportNamedSpecifier, ExportNamespaceSpecifier,
        ExportSpecifier, ImportDecl, ImportDefaultSpecifier, ImportKind, ImportNamedSpecifier,
        ImportSpecifier, ImportStarAsSpecifier, ModuleDecl, NamedExport,
    },
    operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp},
    pat::{ArrayPat, AssignPat, AssignPatProp, KeyValuePatProp, ObjectPat, ObjectPatProp, Pat, RestPat},
    prop::{
        AssignProp, ComputedPropName, GetterProp, KeyValueProp, MethodProp, Prop, PropName,
        SetterProp,
    },
    stmt::{
        BlockStmt, BreakStmt, CatchClause, ContinueStmt, DebuggerStmt, DoWhileStmt, EmptyStmt,
        ExprStmt, ForInStmt, ForOfStmt, ForStmt, IfStmt, LabeledStmt, ReturnStmt, Stmt, SwitchCase,
        SwitchStmt, ThrowStmt, TryStmt, VarDeclOrExpr, VarDeclOrPat, WhileStmt, WithStmt,
    },
    types::{
        ArrayType, CallProperty, ExistentialType, FnType, FnTypeParam, ImportType, IndexedAccessType,
        Indexer, InterfaceExtends, InternalSlot, IntersectionType, KeyOfType, KeywordKind,
        KeywordType, LitType, MappedType, MethodSigKind, NullableType, ObjectType,
        ObjectTypeMember, ObjectTypeMethod, ObjectTypeProp, ObjectTypeSpread, ParenType,
        Predicate, QualifiedName, ThisType, TupleType, Type, TypeAnn, TypeLit, TypeName,
        TypeOfType, TypeParam, TypeParamDecl, TypeParamInstantiation, TypeRef, UnionType,
        Variance, VarianceKind,
    },
};

#[macro_use]
mod macros;
mod class;
mod decl;
mod expr;
mod function;
mod ident;
mod jsx;
mod lit;
mod module;
mod module_decl;
mod operators;
mod pat;
mod prop;
mod stmt;
mod types;
