//! Parses escritos à mão, compartilhados pelos testes dos módulos.
//!
//! Cada constante é um bloco do formato de intercâmbio (uma linha por
//! token); [`block`] junta as linhas como o parser externo as entrega.

/// Junta linhas num bloco terminado por quebra de linha.
pub fn block(rows: &[&str]) -> String {
    let mut out = rows.join("\n");
    out.push('\n');
    out
}

/// "Gershwin composed Rhapsody in Blue in 1924 ."
pub const GERSHWIN: &[&str] = &[
    "1\tGershwin\tNNP\t2\tnsubj\t(\"George_Gershwin\", \"Musical Artist\", \"Gershwin\", 1)",
    "2\tcomposed\tVBD\t0\troot\tNone",
    "3\tRhapsody_in_Blue\tNNP\t2\tdobj\t(\"Rhapsody_in_Blue\", \"Musical Work\", \"Rhapsody in Blue\", 3)",
    "4\tin\tIN\t2\tprep\tNone",
    "5\t1924\tCD\t4\tpobj\tNone",
    "6\t.\t.\t2\tpunct\tNone",
];

/// "Mary has a dog ." sem nenhuma entidade.
pub const MARY: &[&str] = &[
    "1\tMary\tNNP\t2\tnsubj\tNone",
    "2\thas\tVBZ\t0\troot\tNone",
    "3\ta\tDT\t4\tdet\tNone",
    "4\tdog\tNN\t2\tdobj\tNone",
    "5\t.\t.\t2\tpunct\tNone",
];

/// "Riel was born in Winnipeg ."
pub const RIEL: &[&str] = &[
    "1\tRiel\tNNP\t3\tnsubjpass\t(\"Louis_Riel\", \"Person\", \"Riel\", 1)",
    "2\twas\tVBD\t3\tauxpass\tNone",
    "3\tborn\tVBN\t0\troot\tNone",
    "4\tin\tIN\t3\tprep\tNone",
    "5\tWinnipeg\tNNP\t4\tpobj\t(\"Winnipeg\", \"Location\", \"Winnipeg\", 5)",
    "6\t.\t.\t3\tpunct\tNone",
];

/// "Potsdam is the capital of Brandenburg ."
pub const POTSDAM: &[&str] = &[
    "1\tPotsdam\tNNP\t2\tnsubj\t(\"Potsdam\", \"Location\", \"Potsdam\", 1)",
    "2\tis\tVBZ\t0\troot\tNone",
    "3\tthe\tDT\t4\tdet\tNone",
    "4\tcapital\tNN\t2\tattr\tNone",
    "5\tof\tIN\t4\tprep\tNone",
    "6\tBrandenburg\tNNP\t5\tpobj\t(\"Brandenburg\", \"Location\", \"Brandenburg\", 6)",
    "7\t.\t.\t2\tpunct\tNone",
];

/// "Bob sold Alice 's house ."
pub const POSS_OBJECT: &[&str] = &[
    "1\tBob\tNNP\t2\tnsubj\t(\"Bob\", \"Person\", \"Bob\", 1)",
    "2\tsold\tVBD\t0\troot\tNone",
    "3\tAlice\tNNP\t5\tposs\t(\"Alice\", \"Person\", \"Alice\", 3)",
    "4\t's\tPOS\t3\tcase\tNone",
    "5\thouse\tNN\t2\tdobj\tNone",
    "6\t.\t.\t2\tpunct\tNone",
];

/// "Alice wrote her first book in 1992 ." com "her" anotado como Alice.
pub const ALICE: &[&str] = &[
    "1\tAlice\tNNP\t2\tnsubj\t(\"Alice\", \"Person\", \"Alice\", 1)",
    "2\twrote\tVBD\t0\troot\tNone",
    "3\ther\tPRP$\t5\tposs\t(\"Alice\", \"Person\", \"her\", 3)",
    "4\tfirst\tJJ\t5\tamod\tNone",
    "5\tbook\tNN\t2\tdobj\tNone",
    "6\tin\tIN\t2\tprep\tNone",
    "7\t1992\tCD\t6\tpobj\tNone",
    "8\t.\t.\t2\tpunct\tNone",
];

/// "It is her book ." com "her" rotulado erroneamente como dobj.
pub const HER_BOOK: &[&str] = &[
    "1\tIt\tPRP\t2\tnsubj\tNone",
    "2\tis\tVBZ\t0\troot\tNone",
    "3\ther\tPRP$\t4\tdobj\t(\"Alice\", \"Person\", \"her\", 3)",
    "4\tbook\tNN\t2\tattr\tNone",
    "5\t.\t.\t2\tpunct\tNone",
];

/// "He gave it to her ." — "her" é pronome oblíquo.
pub const HER_OBJECT: &[&str] = &[
    "1\tHe\tPRP\t2\tnsubj\t(\"Bob\", \"Person\", \"He\", 1)",
    "2\tgave\tVBD\t0\troot\tNone",
    "3\tit\tPRP\t2\tdobj\tNone",
    "4\tto\tIN\t2\tprep\tNone",
    "5\ther\tPRP\t4\tpobj\t(\"Alice\", \"Person\", \"her\", 5)",
    "6\t.\t.\t2\tpunct\tNone",
];

/// "Her mother met Alice ." — o possessivo vem antes do nome.
pub const HER_MOTHER: &[&str] = &[
    "1\tHer\tPRP$\t2\tposs\t(\"Alice\", \"Person\", \"Her\", 1)",
    "2\tmother\tNN\t3\tnsubj\tNone",
    "3\tmet\tVBD\t0\troot\tNone",
    "4\tAlice\tNNP\t3\tdobj\t(\"Alice\", \"Person\", \"Alice\", 4)",
    "5\t.\t.\t3\tpunct\tNone",
];

/// "Bob hurt himself ."
pub const REFLEXIVE: &[&str] = &[
    "1\tBob\tNNP\t2\tnsubj\t(\"Bob\", \"Person\", \"Bob\", 1)",
    "2\thurt\tVBD\t0\troot\tNone",
    "3\thimself\tPRP\t2\tdobj\t(\"Bob\", \"Person\", \"himself\", 3)",
    "4\t.\t.\t2\tpunct\tNone",
];

/// "A did X , and B did Y , forming the main point ."
pub const SUBCLAUSE: &[&str] = &[
    "1\tA\tNNP\t2\tnsubj\tNone",
    "2\tdid\tVBD\t0\troot\tNone",
    "3\tX\tNNP\t2\tdobj\tNone",
    "4\t,\t,\t2\tpunct\tNone",
    "5\tand\tCC\t2\tcc\tNone",
    "6\tB\tNNP\t7\tnsubj\tNone",
    "7\tdid\tVBD\t2\tconj\tNone",
    "8\tY\tNNP\t7\tdobj\tNone",
    "9\t,\t,\t7\tpunct\tNone",
    "10\tforming\tVBG\t7\tadvcl\tNone",
    "11\tthe\tDT\t13\tdet\tNone",
    "12\tmain\tJJ\t13\tamod\tNone",
    "13\tpoint\tNN\t10\tdobj\tNone",
    "14\t.\t.\t2\tpunct\tNone",
];

/// "A did X ; B did Y ." — ponto e vírgula depois da oração principal.
pub const SEMICOLON_AFTER: &[&str] = &[
    "1\tA\tNNP\t2\tnsubj\tNone",
    "2\tdid\tVBD\t0\troot\tNone",
    "3\tX\tNNP\t2\tdobj\tNone",
    "4\t;\t:\t2\tpunct\tNone",
    "5\tB\tNNP\t6\tnsubj\tNone",
    "6\tdid\tVBD\t2\tparataxis\tNone",
    "7\tY\tNNP\t6\tdobj\tNone",
    "8\t.\t.\t2\tpunct\tNone",
];

/// "B did Y ; A did X ." — ponto e vírgula antes da oração principal.
pub const SEMICOLON_BEFORE: &[&str] = &[
    "1\tB\tNNP\t2\tnsubj\tNone",
    "2\tdid\tVBD\t6\tparataxis\tNone",
    "3\tY\tNNP\t2\tdobj\tNone",
    "4\t;\t:\t6\tpunct\tNone",
    "5\tA\tNNP\t6\tnsubj\tNone",
    "6\tdid\tVBD\t0\troot\tNone",
    "7\tX\tNNP\t6\tdobj\tNone",
    "8\t.\t.\t6\tpunct\tNone",
];

/// "1992 – Barcelona hosts the games ."
pub const CHRONICLE: &[&str] = &[
    "1\t1992\tCD\t4\tnpadvmod\tNone",
    "2\t\u{2013}\t:\t4\tpunct\tNone",
    "3\tBarcelona\tNNP\t4\tnsubj\t(\"Barcelona\", \"Location\", \"Barcelona\", 3)",
    "4\thosts\tVBZ\t0\troot\tNone",
    "5\tthe\tDT\t6\tdet\tNone",
    "6\tgames\tNNS\t4\tdobj\tNone",
    "7\t.\t.\t4\tpunct\tNone",
];

/// "Note : Bob left ."
pub const COLON: &[&str] = &[
    "1\tNote\tNN\t3\tnpadvmod\tNone",
    "2\t:\t:\t3\tpunct\tNone",
    "3\tleft\tVBD\t0\troot\tNone",
    "4\tBob\tNNP\t3\tnsubj\t(\"Bob\", \"Person\", \"Bob\", 4)",
    "5\t.\t.\t3\tpunct\tNone",
];

/// "It became clear that Bob lied ." com "It" anotado como entidade.
pub const IT_CCOMP: &[&str] = &[
    "1\tIt\tPRP\t2\tnsubj\t(\"Foo\", \"Thing\", \"It\", 1)",
    "2\tbecame\tVBD\t0\troot\tNone",
    "3\tclear\tJJ\t2\tacomp\tNone",
    "4\tthat\tIN\t6\tmark\tNone",
    "5\tBob\tNNP\t6\tnsubj\t(\"Bob\", \"Person\", \"Bob\", 5)",
    "6\tlied\tVBD\t2\tccomp\tNone",
    "7\t.\t.\t2\tpunct\tNone",
];

/// "It worried Alice that Bob lied ." com "It" anotado e objeto pessoa.
pub const IT_WORRIED: &[&str] = &[
    "1\tIt\tPRP\t2\tnsubj\t(\"Foo\", \"Thing\", \"It\", 1)",
    "2\tworried\tVBD\t0\troot\tNone",
    "3\tAlice\tNNP\t2\tdobj\t(\"Alice\", \"Person\", \"Alice\", 3)",
    "4\tthat\tIN\t6\tmark\tNone",
    "5\tBob\tNNP\t6\tnsubj\t(\"Bob\", \"Person\", \"Bob\", 5)",
    "6\tlied\tVBD\t2\tccomp\tNone",
    "7\t.\t.\t2\tpunct\tNone",
];

/// "Three boys ran ." — numeral quantificando o sujeito.
pub const THREE_BOYS: &[&str] = &[
    "1\tThree\tCD\t2\tnummod\tNone",
    "2\tboys\tNNS\t3\tnsubj\tNone",
    "3\tran\tVBD\t0\troot\tNone",
    "4\t.\t.\t3\tpunct\tNone",
];

/// "Bob , the king ." — raiz nominal.
pub const NOMINAL_ROOT: &[&str] = &[
    "1\tBob\tNNP\t4\tnsubj\t(\"Bob\", \"Person\", \"Bob\", 1)",
    "2\t,\t,\t4\tpunct\tNone",
    "3\tthe\tDT\t4\tdet\tNone",
    "4\tking\tNN\t0\troot\tNone",
    "5\t.\t.\t4\tpunct\tNone",
];

/// "Leave now ." — sem sujeito.
pub const NO_SUBJECT: &[&str] = &[
    "1\tLeave\tVB\t0\troot\tNone",
    "2\tnow\tRB\t1\tadvmod\tNone",
    "3\t.\t.\t1\tpunct\tNone",
];
