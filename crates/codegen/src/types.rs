use super::*;

/// Where a type is printed, for the purpose of adding parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypePos {
    /// Array element, indexed object, `keyof` and `?` operand.
    Operand,
    UnionMember,
    IntersectionMember,
}

impl TypePos {
    fn needs_parens(self, ty: &Type) -> bool {
        match self {
            TypePos::Operand => matches!(
                ty,
                Type::Union(..)
                    | Type::Intersection(..)
                    | Type::Fn(..)
                    | Type::KeyOf(..)
                    | Type::Nullable(..)
            ),
            TypePos::IntersectionMember => matches!(ty, Type::Union(..) | Type::Fn(..)),
            TypePos::UnionMember => matches!(ty, Type::Fn(..)),
        }
    }
}

/// Member of an object type, or its explicit inexact marker.
enum TypeMember<'m> {
    Member(&'m ObjectTypeMember),
    Inexact(Span),
}

impl Spanned for TypeMember<'_> {
    fn span(&self) -> Span {
        match self {
            TypeMember::Member(m) => m.span(),
            TypeMember::Inexact(span) => *span,
        }
    }
}

/// Parameter of a function type, including the rest parameter.
struct FnParam<'p> {
    param: &'p FnTypeParam,
    rest: bool,
}

impl Spanned for FnParam<'_> {
    fn span(&self) -> Span {
        self.param.span
    }
}

impl<'a> Emitter<'a> {
    pub fn emit_type(&mut self, node: &Type) -> Result {
        match node {
            Type::Keyword(n) => {
                keyword!(self, n.kind.as_str());
                Ok(())
            }
            Type::Lit(n) => self.emit_type_lit(&n.lit),
            Type::Ref(n) => {
                self.emit_type_name(&n.name)?;
                opt!(self, emit_type_args, n.type_args);
                Ok(())
            }
            Type::Nullable(n) => {
                punct!(self, "?");
                self.emit_type_in(&n.type_ann, TypePos::Operand)
            }
            Type::Object(n) => self.emit_object_type(n, ListFormat::TypeLiteralMembers),
            Type::Array(n) => {
                self.emit_type_in(&n.elem_type, TypePos::Operand)?;
                punct!(self, "[");
                punct!(self, "]");
                Ok(())
            }
            Type::Tuple(n) => self.emit_list(
                n.span,
                &n.elem_types,
                |e, ty| e.emit_type(ty),
                ListFormat::TupleTypeElements,
            ),
            Type::Union(n) => self.emit_list(
                DUMMY_SP,
                &n.types,
                |e, ty| e.emit_type_in(ty, TypePos::UnionMember),
                ListFormat::UnionTypeConstituents,
            ),
            Type::Intersection(n) => self.emit_list(
                DUMMY_SP,
                &n.types,
                |e, ty| e.emit_type_in(ty, TypePos::IntersectionMember),
                ListFormat::IntersectionTypeConstituents,
            ),
            Type::Fn(n) => self.emit_fn_type(n),
            Type::TypeOf(n) => {
                keyword!(self, "typeof");
                space!(self);
                self.emit_type_name(&n.expr)
            }
            Type::IndexedAccess(n) => {
                self.emit_type_in(&n.obj_type, TypePos::Operand)?;
                punct!(self, if n.optional { "?.[" } else { "[" });
                self.emit_type(&n.index_type)?;
                punct!(self, "]");
                Ok(())
            }
            Type::Paren(n) => {
                punct!(self, "(");
                self.emit_type(&n.type_ann)?;
                punct!(self, ")");
                Ok(())
            }
            Type::This(_) => {
                keyword!(self, "this");
                Ok(())
            }
            Type::Existential(_) => {
                punct!(self, "*");
                Ok(())
            }
            Type::KeyOf(n) => {
                keyword!(self, "keyof");
                space!(self);
                self.emit_type_in(&n.type_ann, TypePos::Operand)
            }
            Type::Mapped(n) => self.emit_mapped_type(n),
            Type::Import(n) => {
                if n.is_typeof {
                    keyword!(self, "typeof");
                    space!(self);
                }
                keyword!(self, "import");
                punct!(self, "(");
                self.emit_str_lit(&n.arg)?;
                punct!(self, ")");
                Ok(())
            }
        }
    }

    fn emit_type_in(&mut self, node: &Type, pos: TypePos) -> Result {
        if pos.needs_parens(node) {
            punct!(self, "(");
            self.emit_type(node)?;
            punct!(self, ")");
            Ok(())
        } else {
            self.emit_type(node)
        }
    }

    fn emit_type_lit(&mut self, node: &TypeLit) -> Result {
        match node {
            TypeLit::Str(n) => self.emit_str_lit(n),
            TypeLit::Num(n) => self.wr.write_str(&n.raw),
            TypeLit::BigInt(n) => self.wr.write_str(&n.raw),
            TypeLit::Bool(n) => {
                keyword!(self, if n.value { "true" } else { "false" });
                Ok(())
            }
        }
    }

    pub(crate) fn emit_type_name(&mut self, node: &TypeName) -> Result {
        match node {
            TypeName::Ident(n) => self.emit_ident(n),
            TypeName::Qualified(n) => {
                self.emit_type_name(&n.left)?;
                punct!(self, ".");
                self.emit_ident(&n.right)
            }
        }
    }

    pub(crate) fn emit_type_ann(&mut self, node: &TypeAnn) -> Result {
        punct!(self, ":");
        space!(self);
        self.emit_type(&node.type_ann)
    }

    pub fn emit_type_params(&mut self, node: &TypeParamDecl) -> Result {
        self.emit_list(
            node.span,
            &node.params,
            |e, param| e.emit_type_param(param),
            ListFormat::TypeParameters,
        )
    }

    fn emit_type_param(&mut self, node: &TypeParam) -> Result {
        opt!(self, emit_variance, node.variance);
        self.emit_ident(&node.name)?;
        opt!(self, emit_type_ann, node.bound);
        if let Some(constraint) = &node.constraint {
            space!(self);
            keyword!(self, "extends");
            space!(self);
            self.emit_type(constraint)?;
        }
        if let Some(default) = &node.default {
            space!(self);
            operator!(self, "=");
            space!(self);
            self.emit_type(default)?;
        }
        Ok(())
    }

    pub fn emit_type_args(&mut self, node: &TypeParamInstantiation) -> Result {
        self.emit_list(
            node.span,
            &node.params,
            |e, ty| e.emit_type(ty),
            ListFormat::TypeParameters,
        )
    }

    pub(crate) fn emit_variance(&mut self, node: &Variance) -> Result {
        match node.kind {
            VarianceKind::Plus => punct!(self, "+"),
            VarianceKind::Minus => punct!(self, "-"),
        }
        Ok(())
    }

    /// `(a: A, b?: B, ...rest: R) => T`, or `new (...) => T` for constructors.
    fn emit_fn_type(&mut self, node: &FnType) -> Result {
        if node.is_constructor {
            keyword!(self, "new");
            space!(self);
        }
        opt!(self, emit_type_params, node.type_params);
        self.emit_fn_type_params(node)?;
        space!(self);
        operator!(self, "=>");
        space!(self);
        self.emit_type(&node.return_type)
    }

    /// `<T>(a: A): R` of methods, call properties and declared functions.
    pub(crate) fn emit_fn_type_sig(&mut self, node: &FnType) -> Result {
        opt!(self, emit_type_params, node.type_params);
        self.emit_fn_type_params(node)?;
        punct!(self, ":");
        space!(self);
        self.emit_type(&node.return_type)
    }

    fn emit_fn_type_params(&mut self, node: &FnType) -> Result {
        let params = node
            .params
            .iter()
            .map(|param| FnParam { param, rest: false })
            .chain(node.rest.iter().map(|param| FnParam { param, rest: true }))
            .collect::<Vec<_>>();

        let mut format = ListFormat::Parameters;
        if node.rest.is_some() {
            format -= ListFormat::TrailingCommaAll;
        }
        self.emit_list(
            expr::params_span(&params),
            &params,
            |e, p| e.emit_fn_type_param(p),
            format,
        )
    }

    fn emit_fn_type_param(&mut self, node: &FnParam) -> Result {
        if node.rest {
            punct!(self, "...");
        }
        let param = node.param;
        if let Some(name) = &param.name {
            self.emit_ident(name)?;
            if param.optional {
                punct!(self, "?");
            }
            punct!(self, ":");
            space!(self);
        }
        self.emit_type(&param.type_ann)
    }

    pub(crate) fn emit_object_type(&mut self, node: &ObjectType, format: ListFormat) -> Result {
        let members = node
            .members
            .iter()
            .map(TypeMember::Member)
            .chain(node.inexact.map(TypeMember::Inexact))
            .collect::<Vec<_>>();

        if node.exact {
            punct!(self, "{|");
            self.emit_list(
                node.span,
                &members,
                |e, m| e.emit_type_member(m),
                format - ListFormat::BracketsMask,
            )?;
            punct!(self, "|}");
            Ok(())
        } else {
            self.emit_list(node.span, &members, |e, m| e.emit_type_member(m), format)
        }
    }

    fn emit_type_member(&mut self, node: &TypeMember) -> Result {
        match node {
            TypeMember::Member(m) => self.emit_object_type_member(m),
            TypeMember::Inexact(_) => {
                punct!(self, "...");
                Ok(())
            }
        }
    }

    pub fn emit_object_type_member(&mut self, node: &ObjectTypeMember) -> Result {
        match node {
            ObjectTypeMember::Prop(n) => {
                self.emit_static(n.is_static)?;
                if n.proto {
                    keyword!(self, "proto");
                    space!(self);
                }
                if n.readonly {
                    keyword!(self, "readonly");
                    space!(self);
                }
                opt!(self, emit_variance, n.variance);
                self.emit_prop_name(&n.key)?;
                if n.optional {
                    punct!(self, "?");
                }
                punct!(self, ":");
                space!(self);
                self.emit_type(&n.value)
            }
            ObjectTypeMember::Method(n) => {
                self.emit_static(n.is_static)?;
                match n.kind {
                    MethodSigKind::Method => {}
                    MethodSigKind::Getter => {
                        keyword!(self, "get");
                        space!(self);
                    }
                    MethodSigKind::Setter => {
                        keyword!(self, "set");
                        space!(self);
                    }
                }
                self.emit_prop_name(&n.key)?;
                if n.optional {
                    punct!(self, "?");
                }
                self.emit_fn_type_sig(&n.fn_type)
            }
            ObjectTypeMember::CallProp(n) => {
                self.emit_static(n.is_static)?;
                self.emit_fn_type_sig(&n.fn_type)
            }
            ObjectTypeMember::Indexer(n) => self.emit_indexer(n),
            ObjectTypeMember::Spread(n) => {
                punct!(self, "...");
                self.emit_type(&n.type_ann)
            }
            ObjectTypeMember::InternalSlot(n) => {
                self.emit_static(n.is_static)?;
                punct!(self, "[[");
                self.emit_ident(&n.id)?;
                punct!(self, "]]");
                if n.optional {
                    punct!(self, "?");
                }
                match n.value.as_ref() {
                    Type::Fn(fn_type) if n.method => self.emit_fn_type_sig(fn_type),
                    value => {
                        punct!(self, ":");
                        space!(self);
                        self.emit_type(value)
                    }
                }
            }
        }
    }

    fn emit_static(&mut self, is_static: bool) -> Result {
        if is_static {
            keyword!(self, "static");
            space!(self);
        }
        Ok(())
    }

    pub(crate) fn emit_indexer(&mut self, node: &Indexer) -> Result {
        self.emit_static(node.is_static)?;
        if node.readonly {
            keyword!(self, "readonly");
            space!(self);
        }
        opt!(self, emit_variance, node.variance);
        punct!(self, "[");
        if let Some(id) = &node.id {
            self.emit_ident(id)?;
            punct!(self, ":");
            space!(self);
        }
        self.emit_type(&node.key)?;
        punct!(self, "]");
        punct!(self, ":");
        space!(self);
        self.emit_type(&node.value)
    }

    fn emit_mapped_type(&mut self, node: &MappedType) -> Result {
        punct!(self, "{");
        bracket_space!(self);
        if node.readonly {
            keyword!(self, "readonly");
            space!(self);
        }
        punct!(self, "[");
        self.emit_ident(&node.type_param)?;
        space!(self);
        keyword!(self, "in");
        space!(self);
        self.emit_type(&node.constraint)?;
        punct!(self, "]");
        if node.optional {
            punct!(self, "?");
        }
        punct!(self, ":");
        space!(self);
        self.emit_type(&node.type_ann)?;
        bracket_space!(self);
        punct!(self, "}");
        Ok(())
    }
}
