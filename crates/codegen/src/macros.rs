macro_rules! opt_leading_space {
    ($emitter:expr, $func:ident, $e:expr) => {
        if let Some(ref e) = $e {
            space!($emitter);
            $emitter.$func(e)?;
        }
    };
}

macro_rules! opt {
    ($emitter:expr, $func:ident, $e:expr) => {{
        if let Some(ref expr) = $e {
            $emitter.$func(expr)?;
        }
    }};
}

macro_rules! keyword {
    ($emitter:expr, $s:expr) => {
        $emitter.wr.write_keyword($s)?
    };
}

macro_rules! punct {
    ($emitter:expr, $s:expr) => {
        $emitter.wr.write_punct($s)?
    };
}

macro_rules! operator {
    ($emitter:expr, $s:expr) => {
        $emitter.wr.write_operator($s)?
    };
}

macro_rules! space {
    ($emitter:expr) => {
        $emitter.wr.write_space()?
    };
}

/// `{ a }` or `{a}` depending on `bracket_spacing`.
macro_rules! bracket_space {
    ($emitter:expr) => {
        if $emitter.cfg.bracket_spacing {
            $emitter.wr.write_space()?;
        }
    };
}

/// This macro *may* emit a semicolon, depending on the configured style.
macro_rules! formatting_semi {
    ($emitter:expr) => {
        if $emitter.cfg.semicolons {
            $emitter.wr.write_punct(";")?;
        }
    };
}

/// This macro *always* emits a semicolon, as it's required by the structure we
/// emit.
macro_rules! semi {
    ($emitter:expr) => {
        $emitter.wr.write_punct(";")?
    };
}
