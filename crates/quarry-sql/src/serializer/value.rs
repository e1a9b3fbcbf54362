use super::{Formatter, Params, ToSql};

use crate::stmt::{Literal, Value};

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}

impl ToSql for &Literal {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match *self {
            Literal::Integer(value) => fmt!(f, value),
            Literal::Text(value) => {
                f.dst.push('\'');
                f.dst.push_str(&value.replace('\'', "''"));
                f.dst.push('\'');
            }
        }
    }
}
