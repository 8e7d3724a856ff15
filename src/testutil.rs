#![cfg(test)]

use crate::dict::PhoneticDictionary;

/// Kirschenbaum transcriptions for the words used across pipeline tests.
pub const TEST_DICT: &str = "\
do;d'u
daddy;d'&di
odd;'0d
chair;tS'e@r
nature;n'eItS@r
teach;t'itS
gin;dZ'In
edge;'edZ
queen;kw'in
enough;In'Vf
off;'0f
photo;f'@Ut@U
of;'0v
city;s'Iti
pass;p'As
rose;r'@Uz
session;s'eSn
emotion;Im'@USn
genre;Z'Anr@
pleasure;pl'eZ@r
equation;Ikw'eIZn
drink;dr'INk
bell;b'el
chocolate;tS'0kl@t
pronunciation;pr@n.VnsI'eISn
go;g'@U
car;k'Ar\\
through;Tr'u
this;D'Is
London;l'Vnd@n
hmm;
";

/// Shared test dictionary for pipeline tests.
pub fn test_dict() -> PhoneticDictionary {
    PhoneticDictionary::parse(TEST_DICT).expect("test dictionary must parse")
}
