//! `Visit` and `VisitMut` for every node of the syntax tree.
//!
//! Each node type gets a `visit_*` / `visit_mut_*` hook whose default
//! implementation walks the node's children. Overriding a hook and calling
//! `n.visit_children_with(self)` (or `visit_mut_children_with`) continues the
//! walk below it.
#![allow(clippy::vec_box)]

// This is not a public api.
#[doc(hidden)]
pub extern crate ast;

use ast::*;

pub trait VisitWith<V: ?Sized> {
    /// Calls the visitor hook for `self`.
    fn visit_with(&self, v: &mut V);

    /// Visits the children of `self`.
    fn visit_children_with(&self, v: &mut V);
}

pub trait VisitMutWith<V: ?Sized> {
    fn visit_mut_with(&mut self, v: &mut V);

    fn visit_mut_children_with(&mut self, v: &mut V);
}

macro_rules! define {
    (
        $(
            $visit:ident, $visit_mut:ident: $T:ident $body:tt;
        )*
    ) => {
        pub trait Visit {
            $(
                fn $visit(&mut self, n: &$T) {
                    n.visit_children_with(self)
                }
            )*
        }

        pub trait VisitMut {
            $(
                fn $visit_mut(&mut self, n: &mut $T) {
                    n.visit_mut_children_with(self)
                }
            )*
        }

        $(
            node!($visit, $visit_mut, $T $body);
        )*
    };
}

macro_rules! node {
    ($visit:ident, $visit_mut:ident, $T:ident { $($field:ident),* $(,)? }) => {
        impl<V: ?Sized + Visit> VisitWith<V> for $T {
            #[inline]
            fn visit_with(&self, v: &mut V) {
                v.$visit(self)
            }

            #[allow(unused_variables)]
            fn visit_children_with(&self, v: &mut V) {
                $(
                    self.$field.visit_with(v);
                )*
            }
        }

        impl<V: ?Sized + VisitMut> VisitMutWith<V> for $T {
            #[inline]
            fn visit_mut_with(&mut self, v: &mut V) {
                v.$visit_mut(self)
            }

            #[allow(unused_variables)]
            fn visit_mut_children_with(&mut self, v: &mut V) {
                $(
                    self.$field.visit_mut_with(v);
                )*
            }
        }
    };
    ($visit:ident, $visit_mut:ident, $T:ident [ $($variant:ident),* $(,)? ]) => {
        impl<V: ?Sized + Visit> VisitWith<V> for $T {
            #[inline]
            fn visit_with(&self, v: &mut V) {
                v.$visit(self)
            }

            fn visit_children_with(&self, v: &mut V) {
                match self {
                    $(
                        $T::$variant(n) => n.visit_with(v),
                    )*
                }
            }
        }

        impl<V: ?Sized + VisitMut> VisitMutWith<V> for $T {
            #[inline]
            fn visit_mut_with(&mut self, v: &mut V) {
                v.$visit_mut(self)
            }

            fn visit_mut_children_with(&mut self, v: &mut V) {
                match self {
                    $(
                        $T::$variant(n) => n.visit_mut_with(v),
                    )*
                }
            }
        }
    };
}

impl<V: ?Sized, T: VisitWith<V>> VisitWith<V> for Box<T> {
    #[inline]
    fn visit_with(&self, v: &mut V) {
        (**self).visit_with(v)
    }

    #[inline]
    fn visit_children_with(&self, v: &mut V) {
        (**self).visit_children_with(v)
    }
}

impl<V: ?Sized, T: VisitWith<V>> VisitWith<V> for Option<T> {
    #[inline]
    fn visit_with(&self, v: &mut V) {
        if let Some(n) = self {
            n.visit_with(v)
        }
    }

    #[inline]
    fn visit_children_with(&self, v: &mut V) {
        if let Some(n) = self {
            n.visit_children_with(v)
        }
    }
}

impl<V: ?Sized, T: VisitWith<V>> VisitWith<V> for Vec<T> {
    #[inline]
    fn visit_with(&self, v: &mut V) {
        for n in self {
            n.visit_with(v)
        }
    }

    #[inline]
    fn visit_children_with(&self, v: &mut V) {
        for n in self {
            n.visit_children_with(v)
        }
    }
}

impl<V: ?Sized, T: VisitMutWith<V>> VisitMutWith<V> for Box<T> {
    #[inline]
    fn visit_mut_with(&mut self, v: &mut V) {
        (**self).visit_mut_with(v)
    }

    #[inline]
    fn visit_mut_children_with(&mut self, v: &mut V) {
        (**self).visit_mut_children_with(v)
    }
}

impl<V: ?Sized, T: VisitMutWith<V>> VisitMutWith<V> for Option<T> {
    #[inline]
    fn visit_mut_with(&mut self, v: &mut V) {
        if let Some(n) = self {
            n.visit_mut_with(v)
        }
    }

    #[inline]
    fn visit_mut_children_with(&mut self, v: &mut V) {
        if let Some(n) = self {
            n.visit_mut_children_with(v)
        }
    }
}

impl<V: ?Sized, T: VisitMutWith<V>> VisitMutWith<V> for Vec<T> {
    #[inline]
    fn visit_mut_with(&mut self, v: &mut V) {
        for n in self {
            n.visit_mut_with(v)
        }
    }

    #[inline]
    fn visit_mut_children_with(&mut self, v: &mut V) {
        for n in self {
            n.visit_mut_children_with(v)
        }
    }
}

define! {
    visit_program, visit_mut_program: Program { body };
    visit_module_item, visit_mut_module_item: ModuleItem [ModuleDecl, Stmt];

    visit_module_decl, visit_mut_module_decl: ModuleDecl [
        Import,
        ExportDecl,
        ExportNamed,
        ExportDefaultDecl,
        ExportDefaultExpr,
        ExportAll,
        DeclareExportDefaultType,
        ExportAssignment,
    ];
    visit_import_decl, visit_mut_import_decl: ImportDecl { specifiers, src };
    visit_import_specifier, visit_mut_import_specifier: ImportSpecifier [Default, Namespace, Named];
    visit_import_default_specifier, visit_mut_import_default_specifier: ImportDefaultSpecifier { local };
    visit_import_star_as_specifier, visit_mut_import_star_as_specifier: ImportStarAsSpecifier { local };
    visit_import_named_specifier, visit_mut_import_named_specifier: ImportNamedSpecifier { local, imported };
    visit_export_decl, visit_mut_export_decl: ExportDecl { decl };
    visit_named_export, visit_mut_named_export: NamedExport { specifiers, src };
    visit_export_specifier, visit_mut_export_specifier: ExportSpecifier [Namespace, Named];
    visit_export_namespace_specifier, visit_mut_export_namespace_specifier: ExportNamespaceSpecifier { name };
    visit_export_named_specifier, visit_mut_export_named_specifier: ExportNamedSpecifier { orig, exported };
    visit_export_default_decl, visit_mut_export_default_decl: ExportDefaultDecl { decl };
    visit_default_decl, visit_mut_default_decl: DefaultDecl [Class, Fn, DeclareFn, DeclareClass];
    visit_export_default_expr, visit_mut_export_default_expr: ExportDefaultExpr { expr };
    visit_export_all, visit_mut_export_all: ExportAll { src };
    visit_declare_export_default_type, visit_mut_declare_export_default_type: DeclareExportDefaultType { type_ann };
    visit_export_assignment, visit_mut_export_assignment: ExportAssignment { expr };

    visit_stmt, visit_mut_stmt: Stmt [
        Block, Empty, Debugger, With, Return, Labeled, Break, Continue, If, Switch, Throw, Try,
        While, DoWhile, For, ForIn, ForOf, Decl, Expr,
    ];
    visit_block_stmt, visit_mut_block_stmt: BlockStmt { stmts };
    visit_empty_stmt, visit_mut_empty_stmt: EmptyStmt {};
    visit_debugger_stmt, visit_mut_debugger_stmt: DebuggerStmt {};
    visit_with_stmt, visit_mut_with_stmt: WithStmt { obj, body };
    visit_return_stmt, visit_mut_return_stmt: ReturnStmt { arg };
    visit_labeled_stmt, visit_mut_labeled_stmt: LabeledStmt { label, body };
    visit_break_stmt, visit_mut_break_stmt: BreakStmt { label };
    visit_continue_stmt, visit_mut_continue_stmt: ContinueStmt { label };
    visit_if_stmt, visit_mut_if_stmt: IfStmt { test, cons, alt };
    visit_switch_stmt, visit_mut_switch_stmt: SwitchStmt { discriminant, cases };
    visit_switch_case, visit_mut_switch_case: SwitchCase { test, cons };
    visit_throw_stmt, visit_mut_throw_stmt: ThrowStmt { arg };
    visit_try_stmt, visit_mut_try_stmt: TryStmt { block, handler, finalizer };
    visit_catch_clause, visit_mut_catch_clause: CatchClause { param, body };
    visit_while_stmt, visit_mut_while_stmt: WhileStmt { test, body };
    visit_do_while_stmt, visit_mut_do_while_stmt: DoWhileStmt { body, test };
    visit_for_stmt, visit_mut_for_stmt: ForStmt { init, test, update, body };
    visit_for_in_stmt, visit_mut_for_in_stmt: ForInStmt { left, right, body };
    visit_for_of_stmt, visit_mut_for_of_stmt: ForOfStmt { left, right, body };
    visit_var_decl_or_pat, visit_mut_var_decl_or_pat: VarDeclOrPat [VarDecl, Pat];
    visit_var_decl_or_expr, visit_mut_var_decl_or_expr: VarDeclOrExpr [VarDecl, Expr];
    visit_expr_stmt, visit_mut_expr_stmt: ExprStmt { expr };

    visit_decl, visit_mut_decl: Decl [
        Class, Fn, Var, TypeAlias, OpaqueType, Interface, DeclareFn, DeclareClass, Module,
        DeclareModuleExports,
    ];
    visit_class_decl, visit_mut_class_decl: ClassDecl { ident, class };
    visit_fn_decl, visit_mut_fn_decl: FnDecl { ident, function };
    visit_var_decl, visit_mut_var_decl: VarDecl { decls };
    visit_var_declarator, visit_mut_var_declarator: VarDeclarator { name, init };
    visit_type_alias_decl, visit_mut_type_alias_decl: TypeAliasDecl { id, type_params, type_ann };
    visit_opaque_type_decl, visit_mut_opaque_type_decl: OpaqueTypeDecl { id, type_params, supertype, impltype };
    visit_interface_decl, visit_mut_interface_decl: InterfaceDecl { id, type_params, extends, body };
    visit_declare_fn_decl, visit_mut_declare_fn_decl: DeclareFnDecl { id, fn_type, predicate };
    visit_declare_class_decl, visit_mut_declare_class_decl: DeclareClassDecl {
        id, type_params, extends, mixins, implements, body
    };
    visit_ambient_module_decl, visit_mut_ambient_module_decl: AmbientModuleDecl { id, body };
    visit_module_name, visit_mut_module_name: ModuleName [Str, Ident];
    visit_declare_module_exports, visit_mut_declare_module_exports: DeclareModuleExports { type_ann };

    visit_expr, visit_mut_expr: Expr [
        This, Array, Object, Fn, Unary, Update, Bin, Assign, Member, Cond, Call, New, Seq, Ident,
        Lit, Tpl, TaggedTpl, Arrow, Class, Yield, MetaProp, Await, Paren, JSXElement, JSXFragment,
        TypeCast, As, PrivateName,
    ];
    visit_this_expr, visit_mut_this_expr: ThisExpr {};
    visit_array_lit, visit_mut_array_lit: ArrayLit { elems };
    visit_object_lit, visit_mut_object_lit: ObjectLit { props };
    visit_prop_or_spread, visit_mut_prop_or_spread: PropOrSpread [Spread, Prop];
    visit_spread_element, visit_mut_spread_element: SpreadElement { expr };
    visit_unary_expr, visit_mut_unary_expr: UnaryExpr { arg };
    visit_update_expr, visit_mut_update_expr: UpdateExpr { arg };
    visit_bin_expr, visit_mut_bin_expr: BinExpr { left, right };
    visit_fn_expr, visit_mut_fn_expr: FnExpr { ident, function };
    visit_class_expr, visit_mut_class_expr: ClassExpr { ident, class };
    visit_assign_expr, visit_mut_assign_expr: AssignExpr { left, right };
    visit_member_expr, visit_mut_member_expr: MemberExpr { obj, prop };
    visit_member_prop, visit_mut_member_prop: MemberProp [Ident, PrivateName, Computed];
    visit_cond_expr, visit_mut_cond_expr: CondExpr { test, cons, alt };
    visit_call_expr, visit_mut_call_expr: CallExpr { callee, type_args, args };
    visit_callee, visit_mut_callee: Callee [Super, Import, Expr];
    visit_new_expr, visit_mut_new_expr: NewExpr { callee, type_args, args };
    visit_seq_expr, visit_mut_seq_expr: SeqExpr { exprs };
    visit_arrow_expr, visit_mut_arrow_expr: ArrowExpr {
        type_params, params, return_type, predicate, body
    };
    visit_block_stmt_or_expr, visit_mut_block_stmt_or_expr: BlockStmtOrExpr [BlockStmt, Expr];
    visit_yield_expr, visit_mut_yield_expr: YieldExpr { arg };
    visit_meta_prop_expr, visit_mut_meta_prop_expr: MetaPropExpr { meta, prop };
    visit_await_expr, visit_mut_await_expr: AwaitExpr { arg };
    visit_tpl, visit_mut_tpl: Tpl { quasis, exprs };
    visit_tagged_tpl, visit_mut_tagged_tpl: TaggedTpl { tag, type_args, tpl };
    visit_tpl_element, visit_mut_tpl_element: TplElement {};
    visit_paren_expr, visit_mut_paren_expr: ParenExpr { expr };
    visit_type_cast_expr, visit_mut_type_cast_expr: TypeCastExpr { expr, type_ann };
    visit_as_expr, visit_mut_as_expr: AsExpr { expr, type_ann };
    visit_expr_or_super, visit_mut_expr_or_super: ExprOrSuper [Super, Expr];
    visit_super, visit_mut_super: Super {};
    visit_import, visit_mut_import: Import {};
    visit_expr_or_spread, visit_mut_expr_or_spread: ExprOrSpread { expr };

    visit_function, visit_mut_function: Function {
        type_params, params, return_type, predicate, body
    };
    visit_param, visit_mut_param: Param { pat };
    visit_class, visit_mut_class: Class {
        type_params, super_class, super_type_args, implements, body
    };
    visit_class_member, visit_mut_class_member: ClassMember [Method, ClassProp, Index, Empty];
    visit_class_prop, visit_mut_class_prop: ClassProp { key, type_ann, value };
    visit_class_method, visit_mut_class_method: ClassMethod { key, function };
    visit_key, visit_mut_key: Key [Public, Private];

    visit_ident, visit_mut_ident: Ident {};
    visit_binding_ident, visit_mut_binding_ident: BindingIdent { id, type_ann };
    visit_private_name, visit_mut_private_name: PrivateName { id };

    visit_lit, visit_mut_lit: Lit [Str, Bool, Null, Num, BigInt, Regex];
    visit_str, visit_mut_str: Str {};
    visit_bool, visit_mut_bool: Bool {};
    visit_null, visit_mut_null: Null {};
    visit_number, visit_mut_number: Number {};
    visit_big_int, visit_mut_big_int: BigInt {};
    visit_regex, visit_mut_regex: Regex {};

    visit_pat, visit_mut_pat: Pat [Ident, Array, Rest, Object, Assign, Expr];
    visit_array_pat, visit_mut_array_pat: ArrayPat { elems, type_ann };
    visit_object_pat, visit_mut_object_pat: ObjectPat { props, type_ann };
    visit_assign_pat, visit_mut_assign_pat: AssignPat { left, right };
    visit_rest_pat, visit_mut_rest_pat: RestPat { arg, type_ann };
    visit_object_pat_prop, visit_mut_object_pat_prop: ObjectPatProp [KeyValue, Assign, Rest];
    visit_key_value_pat_prop, visit_mut_key_value_pat_prop: KeyValuePatProp { key, value };
    visit_assign_pat_prop, visit_mut_assign_pat_prop: AssignPatProp { key, value };

    visit_prop, visit_mut_prop: Prop [Shorthand, KeyValue, Assign, Getter, Setter, Method];
    visit_key_value_prop, visit_mut_key_value_prop: KeyValueProp { key, value };
    visit_assign_prop, visit_mut_assign_prop: AssignProp { key, value };
    visit_getter_prop, visit_mut_getter_prop: GetterProp { key, function };
    visit_setter_prop, visit_mut_setter_prop: SetterProp { key, function };
    visit_method_prop, visit_mut_method_prop: MethodProp { key, function };
    visit_prop_name, visit_mut_prop_name: PropName [Ident, Str, Num, BigInt, Computed];
    visit_computed_prop_name, visit_mut_computed_prop_name: ComputedPropName { expr };

    visit_jsx_object, visit_mut_jsx_object: JSXObject [JSXMemberExpr, Ident];
    visit_jsx_member_expr, visit_mut_jsx_member_expr: JSXMemberExpr { obj, prop };
    visit_jsx_namespaced_name, visit_mut_jsx_namespaced_name: JSXNamespacedName { ns, name };
    visit_jsx_empty_expr, visit_mut_jsx_empty_expr: JSXEmptyExpr {};
    visit_jsx_expr_container, visit_mut_jsx_expr_container: JSXExprContainer { expr };
    visit_jsx_expr, visit_mut_jsx_expr: JSXExpr [JSXEmptyExpr, Expr];
    visit_jsx_spread_child, visit_mut_jsx_spread_child: JSXSpreadChild { expr };
    visit_jsx_element_name, visit_mut_jsx_element_name: JSXElementName [
        Ident, JSXMemberExpr, JSXNamespacedName,
    ];
    visit_jsx_opening_element, visit_mut_jsx_opening_element: JSXOpeningElement {
        name, type_args, attrs
    };
    visit_jsx_attr_or_spread, visit_mut_jsx_attr_or_spread: JSXAttrOrSpread [JSXAttr, SpreadElement];
    visit_jsx_closing_element, visit_mut_jsx_closing_element: JSXClosingElement { name };
    visit_jsx_attr, visit_mut_jsx_attr: JSXAttr { name, value };
    visit_jsx_attr_name, visit_mut_jsx_attr_name: JSXAttrName [Ident, JSXNamespacedName];
    visit_jsx_attr_value, visit_mut_jsx_attr_value: JSXAttrValue [
        Str, JSXExprContainer, JSXElement, JSXFragment,
    ];
    visit_jsx_text, visit_mut_jsx_text: JSXText {};
    visit_jsx_element, visit_mut_jsx_element: JSXElement { opening, children, closing };
    visit_jsx_element_child, visit_mut_jsx_element_child: JSXElementChild [
        JSXText, JSXExprContainer, JSXSpreadChild, JSXElement, JSXFragment,
    ];
    visit_jsx_fragment, visit_mut_jsx_fragment: JSXFragment { opening, children, closing };
    visit_jsx_opening_fragment, visit_mut_jsx_opening_fragment: JSXOpeningFragment {};
    visit_jsx_closing_fragment, visit_mut_jsx_closing_fragment: JSXClosingFragment {};

    visit_type_ann, visit_mut_type_ann: TypeAnn { type_ann };
    visit_type_param_decl, visit_mut_type_param_decl: TypeParamDecl { params };
    visit_type_param, visit_mut_type_param: TypeParam {
        name, variance, bound, constraint, default
    };
    visit_type_param_instantiation, visit_mut_type_param_instantiation: TypeParamInstantiation { params };
    visit_variance, visit_mut_variance: Variance {};
    visit_predicate, visit_mut_predicate: Predicate { expr };
    visit_type, visit_mut_type: Type [
        Keyword, Lit, Ref, Nullable, Object, Array, Tuple, Union, Intersection, Fn, TypeOf,
        IndexedAccess, Paren, This, Existential, KeyOf, Mapped, Import,
    ];
    visit_keyword_type, visit_mut_keyword_type: KeywordType {};
    visit_lit_type, visit_mut_lit_type: LitType { lit };
    visit_type_lit, visit_mut_type_lit: TypeLit [Str, Num, BigInt, Bool];
    visit_type_ref, visit_mut_type_ref: TypeRef { name, type_args };
    visit_type_name, visit_mut_type_name: TypeName [Ident, Qualified];
    visit_qualified_name, visit_mut_qualified_name: QualifiedName { left, right };
    visit_nullable_type, visit_mut_nullable_type: NullableType { type_ann };
    visit_object_type, visit_mut_object_type: ObjectType { members };
    visit_object_type_member, visit_mut_object_type_member: ObjectTypeMember [
        Prop, Method, CallProp, Indexer, Spread, InternalSlot,
    ];
    visit_object_type_prop, visit_mut_object_type_prop: ObjectTypeProp { variance, key, value };
    visit_object_type_method, visit_mut_object_type_method: ObjectTypeMethod { key, fn_type };
    visit_call_property, visit_mut_call_property: CallProperty { fn_type };
    visit_indexer, visit_mut_indexer: Indexer { variance, id, key, value };
    visit_object_type_spread, visit_mut_object_type_spread: ObjectTypeSpread { type_ann };
    visit_internal_slot, visit_mut_internal_slot: InternalSlot { id, value };
    visit_array_type, visit_mut_array_type: ArrayType { elem_type };
    visit_tuple_type, visit_mut_tuple_type: TupleType { elem_types };
    visit_union_type, visit_mut_union_type: UnionType { types };
    visit_intersection_type, visit_mut_intersection_type: IntersectionType { types };
    visit_fn_type, visit_mut_fn_type: FnType { type_params, params, rest, return_type };
    visit_fn_type_param, visit_mut_fn_type_param: FnTypeParam { name, type_ann };
    visit_type_of_type, visit_mut_type_of_type: TypeOfType { expr };
    visit_indexed_access_type, visit_mut_indexed_access_type: IndexedAccessType { obj_type, index_type };
    visit_paren_type, visit_mut_paren_type: ParenType { type_ann };
    visit_this_type, visit_mut_this_type: ThisType {};
    visit_existential_type, visit_mut_existential_type: ExistentialType {};
    visit_key_of_type, visit_mut_key_of_type: KeyOfType { type_ann };
    visit_mapped_type, visit_mut_mapped_type: MappedType { type_param, constraint, type_ann };
    visit_import_type, visit_mut_import_type: ImportType { arg };
    visit_interface_extends, visit_mut_interface_extends: InterfaceExtends { name, type_args };
}

#[cfg(test)]
mod tests {
    use super::*;
    use global_common::DUMMY_SP;

    struct IdentCounter(usize);

    impl Visit for IdentCounter {
        fn visit_ident(&mut self, _: &Ident) {
            self.0 += 1;
        }
    }

    struct Renamer;

    impl VisitMut for Renamer {
        fn visit_mut_ident(&mut self, n: &mut Ident) {
            n.sym = format!("_{}", n.sym).into();
        }
    }

    fn sample() -> Expr {
        Expr::Bin(BinExpr {
            span: DUMMY_SP,
            op: BinaryOp::Add,
            left: Box::new(Expr::Ident(Ident::synth("a"))),
            right: Box::new(Expr::Paren(ParenExpr {
                span: DUMMY_SP,
                expr: Box::new(Expr::Ident(Ident::synth("b"))),
            })),
        })
    }

    #[test]
    fn visit_reaches_nested_nodes() {
        let mut v = IdentCounter(0);
        sample().visit_with(&mut v);
        assert_eq!(v.0, 2);
    }

    #[test]
    fn visit_mut_rewrites_in_place() {
        let mut e = sample();
        e.visit_mut_with(&mut Renamer);
        match e {
            Expr::Bin(b) => {
                assert_eq!(&*b.left, &Expr::Ident(Ident::synth("_a")));
            }
            _ => unreachable!(),
        }
    }
}
