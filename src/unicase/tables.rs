// This file is generated by scripts/gen-unicode-tables.pl. Do not edit.
// Unicode Character Database version 14.0.0.

#![allow(clippy::unreadable_literal)]

use crate::unictype::trie::Trie;

pub(crate) static TOUPPER: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x000d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000e, 0x000f, 0x0010,
        0x0011, 0x0012, 0x0013, 0x0014, 0xffff, 0xffff, 0x0015, 0x0016, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0017, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0018, 0x0019, 0x001a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001b, 0x001c, 0x001d, 0x001e,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001f, 0x0020, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0021, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0x0023, 0xffff, 0x0024, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0025, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0026, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0027, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0028, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff800000, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0x0000003f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x9c000000,
        0x0000000b, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe00000, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0x001e7ffe,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfc600000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0xfff00000, 0xff00003f, 0xf00003ff, 0x00003fff,
        0x0003ffff, 0x003ffff0, 0x03ffff00, 0x3ffff000, 0xffff0000, 0x00000003,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0xfff00000, 0xff00003f, 0xf00003ff, 0xffb53fff,
        0x000000c3, 0xffc00000, 0xfc0000ff, 0x00000fff, 0xffff0000, 0x00000003,
        0xff000000, 0x000003ff, 0x00000000, 0x00000000, 0x003ffff0, 0x84000000,
        0x00000001, 0x00000000, 0x0a3ffffc, 0x00000000, 0x20000000, 0x00000008,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0x00000fff, 0xffff0000, 0x00000003,
        0x00000000, 0x0ffffc00, 0x00000000, 0x0003ffff, 0x00000000, 0x03ffff00,
        0x3ffff000, 0x00000000, 0x000ffffc, 0x00000000, 0x0ffffc00, 0x000e0000,
        0x00000000, 0x00000000, 0xfc000000, 0x3fffefff, 0xffff0000, 0x000ffffb,
        0xfeffffc0, 0xf00003ff, 0x00003fff, 0x0003ffff, 0x003ffff0, 0x03ffff00,
        0x3ffff000, 0xffff0000, 0xfff00003, 0xff00003f, 0x0ffec7ff, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0x00000000, 0xffbffff0, 0xfc0000ff,
        0x00000fff, 0x00000000, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0x00000000, 0xffc00000, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0x000000ff,
        0x00000000, 0x00000000, 0x00000000, 0xff000000, 0x000003ff, 0x0a8fc000,
        0x00002a3f, 0x003ffff0, 0x00000000, 0xc0000000, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xa8702a1f, 0xcb82a1e0, 0x03ff32ff,
        0xfff33000, 0x0000ffcc, 0x000ffcd8, 0x4fffcd40, 0x000000a5, 0x00000000,
        0x952fff33, 0xcc400002, 0xa00000ff, 0x0a544294, 0xff2f0000, 0x544ffcb7,
        0x410a7dca, 0x000000a5, 0xffcb4000, 0xa7f40000, 0x003ff2b0, 0xa8000000,
        0x00000ffc, 0x00000000, 0x00000000, 0x00000000, 0x00a79c00, 0x00000000,
        0x0003ff26, 0xc98a5430, 0x000000ff, 0x80000000, 0xff26294a, 0xf27ffeef,
        0xb9ffc9ff, 0x000003ff, 0x00000000, 0x00000000, 0x003ff250, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x22945400, 0x00000a51,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x50000000, 0x00000001, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xfffc0000, 0xffc0000f, 0x000000ff,
        0xc0000000, 0x0000ffff, 0x00000000, 0x82002080, 0x00020800, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xda000000, 0xbfff6fff, 0xfff6fffd, 0xff800000, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0xfff83ffe,
        0xff83ffe0, 0xf83ffe1f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xc0fff83f, 0x1fff07ff, 0x00003ffc, 0xff1fffc2, 0x0000000f, 0x44000000,
        0x3ffcafff, 0x0000fffe, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfec3ffaa, 0xe300007f, 0x800000ff,
        0x00000ffe, 0xffff0000, 0x00000003, 0x00ffffc0, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0xfff83ffe,
        0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xfec3ffb0, 0xec3ffb0f, 0xc3ffb0ff,
        0x3ffb0ffe, 0xffb0ffec, 0xfb0ffec3, 0xb0ffec3f, 0x0ffec3ff, 0xffec3ffb,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0x0000000f, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0x00000000, 0x003ffff0, 0x03ffff00, 0x3ffff000, 0xffff0000, 0xfff00003,
        0xff00003f, 0xf00003ff, 0xfffc7fff, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff400000, 0xf43ffd0f, 0x43ffd0ff, 0x3ffd0fff, 0xffd0fff4, 0xfd0fff43,
        0xd0fff43f, 0x0fff43ff, 0xfff43ffd, 0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff,
        0x3ffd0fff, 0xffd0fff4, 0xfd0fff43, 0xd0fff43f, 0x0fff43ff, 0xfff43ffd,
        0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff, 0x3ffd0fff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x2f000bc0, 0xf000bc00, 0x000bc002,
        0x00bc002f, 0x0bc002f0, 0xbc002f00, 0xc002f000, 0x002f000b, 0x02f000bc,
        0x2f000bc0, 0xf000bc00, 0x000bc002, 0x00bc002f, 0x0bc002f0, 0xbc002f00,
        0xc002f000, 0x002f000b, 0x02f000bc, 0x2f000bc0, 0xf000bc00, 0x000bc002,
        0x00bc002f, 0x0bc002f0, 0xbc002f00, 0x00000000, 0x002f0000, 0x02f000bc,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x0fffe3ff, 0x00000000,
        0x9e4fe792, 0xe7be79cf, 0x77e79ef9, 0xfe7a4f9e, 0x89c2f9f6, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00022810, 0x00000000, 0x003b9800, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x80000000, 0x000008a3, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0x00000fff, 0x00000000, 0x00000000, 0x00fff140, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x02000080, 0x20000800,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x02000080, 0x20000800,
        0x00008000, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200000, 0x02000000, 0x20000000,
        0x00000000, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0128004a, 0x15800560, 0x58005600,
        0x00064001, 0x00800019, 0x07000200, 0x7e001c00, 0x0001f800, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x02000080, 0x20000800,
        0x00008000, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x02400000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xb0000000, 0x00003e3d,
        0x00000000, 0x02400000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x00000000, 0x1c000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x02400000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x40000000, 0x00003ffe, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xffc3fff0, 0xfc3fff0f, 0xc3fff0ff,
        0x3fff0fff, 0xfff0fffc, 0xff0fffc3, 0xf0fffc3f, 0x0fffc3ff, 0xfffc3fff,
        0x00000000, 0x00000000, 0x03ffff00, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xff9bffe6, 0xf9bffe6f, 0x9bffe6ff,
        0xbffe6fff, 0xffe6fff9, 0xfe6fff9b, 0xe6fff9bf, 0x6fff9bff, 0xfff9bffe,
        0xff9bffe6, 0xf9bffe6f, 0x9bffe6ff, 0xbffe6fff, 0xffe6fff9, 0x000fff9b,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff,
        0x3ffd0fff, 0xffd0fff4, 0xfd0fff43, 0xd0fff43f, 0x0fff43ff, 0xfff43ffd,
        0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff, 0x3ffd0fff, 0xffd0fff4, 0xfd0fff43,
        0xd0fff43f, 0x0fff43ff, 0xfff43ffd, 0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff,
        0x3ffd0fff, 0xffd0fff4, 0xfd0fff43, 0xd0fff43f, 0x0fff43ff, 0xfff43ffd,
        0xfffc0000, 0x0000000f, 0x54000000, 0x3d5d8f57, 0xffff0000, 0xfff00003,
        0xff00003f, 0x000003ff, 0x00000000, 0x00000000, 0xffc00000, 0x000000ff,
        0x3ffff000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0x000000ff, 0x00000000, 0x00000000, 0x00000000,
        0xff000000, 0xf00003ff, 0x00003fff, 0x00000000, 0xffc00000, 0x000000ff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x8e83e3a0, 0xe83e3a0f, 0x83e3a0f8, 0x3e3a0f8e, 0xe3a0f8e8, 0x3a0f8e83,
        0xa0f8e83e, 0x0f8e83e3, 0xf8e83e3a, 0x8e83e3a0, 0xe83e3a0f, 0x83e3a0f8,
        0x3e3a0f8e, 0xe3a0f8e8, 0x3a0f8e83, 0xa0f8e83e, 0x0f8e83e3, 0xf8e83e3a,
        0x8e83e3a0, 0xe83e3a0f, 0x83e3a0f8, 0x00000f8e, 0x0000f8e8, 0x00000000,
        0x00000000, 0x0f8e8000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xffc00000, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0x00000000, 0xffc00000, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xfff00000, 0xff00003f, 0x000003ff, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x00000000,
        0xff000000, 0x000003ff, 0x00000000, 0xfffc0000, 0xffc0000f, 0x000030ff,
        0xc0000000, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfc000000,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0x000000ff, 0x00000000, 0xffff0000, 0xfff00003,
        0x0000003f, 0x00000000, 0x00000000, 0xfffc0000, 0x0000000f, 0x00000000,
        0xc0000000, 0x0000ffff, 0x000ffffc, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x3ffff000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18000000, 0x000000ff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0xa0c36830, 0x0c36830d, 0xc36830da, 0x36830da0, 0x6830da0c, 0x830da0c3,
        0x30da0c36, 0x0da0c368, 0xda0c3683, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0xa0c36830, 0x0c36830d, 0xc36830da, 0x36830da0, 0x6830da0c, 0x830da0c3,
        0x30da0c36, 0x0da0c368, 0xda0c3683, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff800000, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0x0000003f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffd80000, 0xfd8fff63,
        0xd8fff63f, 0x8fff63ff, 0xfff63ffd, 0xff63ffd8, 0xf63ffd8f, 0x63ffd8ff,
        0x3ffd8fff, 0xffd8fff6, 0xfd8fff63, 0xd8fff63f, 0x8fff63ff, 0xfff63ffd,
        0xff63ffd8, 0xf63ffd8f, 0x63ffd8ff, 0x3ffd8fff, 0xffd8fff6, 0xfd8fff63,
        0xd8fff63f, 0x8fff63ff, 0xfff63ffd, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xffd80000, 0xfd8fff63, 0xd8fff63f, 0x8fff63ff, 0xfff63ffd,
        0xff63ffd8, 0xf63ffd8f, 0x63ffd8ff, 0x3ffd8fff, 0xffd8fff6, 0xfd8fff63,
        0xd8fff63f, 0x8fff63ff, 0xfff63ffd, 0xff63ffd8, 0xf63ffd8f, 0x63ffd8ff,
        0x3ffd8fff, 0xffd8fff6, 0xfd8fff63, 0x00fff63f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x40000000, 0xffd9fff6, 0xfd9fff67, 0xd9fff67f, 0x9fff67ff, 0xfff67ffd,
        0xff67ffd9, 0xf640000f, 0x67ffd9ff, 0x7ffd9fff, 0xffd9fff6, 0xfd9fff67,
        0xd9fff67f, 0x9fff67ff, 0xfff67ffd, 0xff67ffd9, 0xf640000f, 0x67ffd9ff,
        0x7ffd9fff, 0xffd9fff6, 0x000fff67, 0xd9fff640, 0x000003ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff03ffc0, 0xf03ffc0f, 0x03ffc0ff, 0x3ffc0fff, 0xffc0fff0, 0xfc0fff03,
        0xc0fff03f, 0x0fff03ff, 0xfff03ffc, 0xff03ffc0, 0xf03ffc0f, 0x03ffc0ff,
        0x3ffc0fff, 0xffc0fff0, 0xfc0fff03, 0xc0fff03f, 0x0fff03ff, 0xfff03ffc,
        0xff03ffc0, 0xf03ffc0f, 0x03ffc0ff, 0x3ffc0fff, 0xffc0fff0, 0xfc0fff03,
        0xc0fff03f, 0x0fff03ff, 0xfff03ffc, 0xff03ffc0, 0x003ffc0f, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0xfff83ffe,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0xfff83ffe,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xf7bffde0, 0x7bffdeff, 0xbffdefff, 0xffdefff7, 0xfdefff7b,
        0xdefff7bf, 0xefff7bff, 0xfff7bffd, 0xff7bffde, 0xf7bffdef, 0x7bffdeff,
        0xbffdefff, 0xffdefff7, 0xfdefff7b, 0xdefff7bf, 0xefff7bff, 0xfff7bffd,
        0xff7bffde, 0xf7bffdef, 0x000000ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 18,
    default: 0,
};

pub(crate) static TOLOWER: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0xffff, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000a, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x000b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff,
        0x000d, 0x000e, 0x000f, 0x0010, 0xffff, 0xffff, 0x0011, 0x0012, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0013, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0014, 0x0015, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0016, 0x0017, 0x0018, 0x0019,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x001b, 0x001c, 0x001d, 0x001e, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001f, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0020, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0021, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800000, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800020, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200000, 0x02000080, 0x20000800, 0x00008000, 0x00000002,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x0003ff39, 0x00000010, 0x00000100,
        0x00001000, 0x00000000, 0x00000004, 0x00000040, 0x00000400, 0x00004000,
        0x00040000, 0x00400000, 0x04000000, 0x40000000, 0x00000000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0xff870000, 0x00000007, 0x00000040, 0x00000400, 0x00000000,
        0x03480000, 0x00000010, 0x00000100, 0x400ce000, 0x00000000, 0x0cd00334,
        0x00000040, 0xf0000000, 0x00328004, 0x000400cb, 0x33400000, 0x0000cf00,
        0x400d3000, 0x00010034, 0x00000000, 0xd3000000, 0x00035400, 0x00358000,
        0x00000001, 0x00000010, 0x00000100, 0x400da000, 0x00000000, 0x00000368,
        0x01000000, 0xa0000000, 0x0000400d, 0x03640000, 0x00400d90, 0x04000000,
        0xc0000000, 0x00010036, 0x00000000, 0x01000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x04000200, 0x80000000, 0x00010000, 0x00200000,
        0x00000040, 0x00000400, 0x00004000, 0x00040000, 0x00400000, 0x04000000,
        0x40000000, 0x00000000, 0x00000004, 0x00000040, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00080000, 0x00000010, 0x00000100,
        0x3ff9f000, 0x0001fff2, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x0003ff7e, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000000,
        0x00000000, 0x00000000, 0xa2b00000, 0x00000042, 0x8ffd7400, 0x000002a2,
        0x00040000, 0xcf400000, 0x1c0045ff, 0x00001001, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000010, 0x00000000,
        0x00001000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x001d0000,
        0x00000000, 0x00000000, 0x00000000, 0x00026000, 0x00250000, 0x02500094,
        0x40000000, 0xf0000000, 0x000fc003, 0x00800000, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00080002,
        0x00800020, 0x08000000, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x00000800, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00020000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x03ffc400,
        0x40000000, 0x00000000, 0x001fffe4, 0x00000000, 0xeffdf800, 0xffdfbff7,
        0x01400050, 0x14000500, 0x40005000, 0x00050001, 0x00500014, 0x05000140,
        0x50001400, 0x00014000, 0x00140005, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00080002,
        0x00800020, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x0004000f, 0x00400000, 0x04000000, 0x40000000, 0x00000000, 0x00000004,
        0x00000040, 0x00000400, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00c00000, 0x0c000300, 0xc0003000,
        0x00030000, 0x0030000c, 0x030000c0, 0x30000c00, 0x0000c000, 0x000c0003,
        0x00c00030, 0x0c000300, 0xc0003000, 0x00030000, 0x0030000c, 0x030000c0,
        0x30000c00, 0x0000c000, 0x000c0003, 0x00c00030, 0x0c000300, 0xc0003000,
        0x00030000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x71801c60, 0x1801c600, 0x801c6007, 0x01c60071, 0x1c600718, 0xc6007180,
        0x60071801, 0x0071801c, 0x071801c6, 0x71801c60, 0x1801c600, 0x801c6007,
        0x01c60071, 0x1c600718, 0xc6007180, 0x60071801, 0x0071801c, 0x071801c6,
        0x71801c60, 0x1801c600, 0x801c6007, 0x00000071, 0x00000718, 0x00000000,
        0x00000000, 0x00718000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x5f4097d0, 0xf4097d02, 0x4097d025, 0x097d025f, 0x97d025f4, 0x7d025f40,
        0xd025f409, 0x025f4097, 0x25f4097d, 0x5f4097d0, 0xf4097d02, 0x4097d025,
        0x097d025f, 0x97d025f4, 0x7d025f40, 0xd025f409, 0x025f4097, 0x25f4097d,
        0x5f4097d0, 0xf4097d02, 0x4097d025, 0x097d025f, 0x97d025f4, 0x7d025f40,
        0xd025f409, 0x025f4097, 0x25f4097d, 0x5f4097d0, 0xf4097d02, 0x4097d025,
        0x097d025f, 0x97d025f4, 0x7d025f40, 0xd025f409, 0x025f4097, 0x25f4097d,
        0x5f4097d0, 0xf4097d02, 0x4097d025, 0x097d025f, 0x97d025f4, 0x7d025f40,
        0xd025f409, 0x025f4097, 0x25f4097d, 0x00200008, 0x02000080, 0x20000800,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xd103f440, 0x103f440f, 0x03f440fd,
        0x3f440fd1, 0xf440fd10, 0x440fd103, 0x40fd103f, 0x0fd103f4, 0xfd103f44,
        0xd103f440, 0x103f440f, 0x03f440fd, 0x3f440fd1, 0xf440fd10, 0x440fd103,
        0x40fd103f, 0x0fd103f4, 0xfd103f44, 0xd103f440, 0x103f440f, 0x03f440fd,
        0x3f440fd1, 0xf440fd10, 0x440fd103, 0x0000003f, 0x0fd10000, 0xfd103f44,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10000000, 0x00003e24,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x0fffe3ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x0fffe3ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x000fffe0, 0x00fffe00, 0x0fffe000, 0xfffe0000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xfb6fffe3, 0xf7ffedbf, 0x000003ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffaa0000, 0xfaaffeab,
        0xf7ffeabf, 0x000003ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xf9cfffe3, 0x00ffe73f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xf90fffe3,
        0xf9ffe43f, 0x000003ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xff800000, 0xf82ffe03, 0xf7ffe0bf, 0x000003ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3e2a3000, 0x00000000, 0xf4100000,
        0x00f7eebd, 0x00000000, 0x00000000, 0x00000000, 0x000001c0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00400010, 0x04000100, 0x40001000, 0x00010000, 0x00100004, 0x01000040,
        0x10000400, 0x00004000, 0x00040001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00400000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x8001a000, 0x001a0006, 0x01a00068, 0x1a000680, 0xa0006800, 0x00068001,
        0x0068001a, 0x068001a0, 0x68001a00, 0x8001a000, 0x001a0006, 0x01a00068,
        0x1a000680, 0xa0006800, 0x00068001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00c00030, 0x0c000300, 0xc0003000, 0x00030000, 0x0030000c, 0x030000c0,
        0x30000c00, 0x0000c000, 0x000c0003, 0x00c00030, 0x0c000300, 0xc0003000,
        0x00030000, 0x0030000c, 0x030000c0, 0x30000c00, 0x0000c000, 0x000c0003,
        0x00c00030, 0x0c000300, 0xc0003000, 0x00030000, 0x0030000c, 0x030000c0,
        0x30000c00, 0x0000c000, 0x000c0003, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x46bd6090, 0x03d619fc, 0x40000000, 0x00000000, 0x00000004,
        0x00000040, 0x3f579000, 0xf5787d60, 0x0003d5e2, 0x00000010, 0x04000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10000000, 0xf5707d5c,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000040, 0x00000400, 0x00000000, 0x00000000, 0x00000010, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000000, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000004, 0x00000040, 0x1dd7f000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00000000, 0x00000000,
        0x00000040, 0x0d6b6000, 0x00000000, 0x00000001, 0x00000010, 0x00000000,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0xabc00000,
        0xb5d6ac75, 0xcd6aff5a, 0x000035ab, 0x6b5b5aee, 0xe835aebd, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0xf7ffd000, 0x775c8d6a, 0x00000000, 0x00000004,
        0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000000, 0x00000000,
        0x00001000, 0x00010000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800000, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00a00028, 0x0a000280, 0xa0002800, 0x00028000, 0x0028000a, 0x028000a0,
        0x28000a00, 0x8000a000, 0x000a0002, 0x00a00028, 0x0a000280, 0xa0002800,
        0x00028000, 0x0028000a, 0x028000a0, 0x28000a00, 0x8000a000, 0x000a0002,
        0x00a00028, 0x0a000280, 0xa0002800, 0x00028000, 0x0000000a, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00a00028, 0x0a000280, 0xa0002800,
        0x00028000, 0x0028000a, 0x028000a0, 0x28000a00, 0x8000a000, 0x000a0002,
        0x00a00028, 0x0a000280, 0xa0002800, 0x00028000, 0x0028000a, 0x028000a0,
        0x28000a00, 0x8000a000, 0x000a0002, 0x00a00028, 0x0a000280, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x009c0027, 0x09c00270, 0x9c002700,
        0xc0027000, 0x00270009, 0x0270009c, 0x27000000, 0x70009c00, 0x0009c002,
        0x009c0027, 0x09c00270, 0x9c002700, 0xc0027000, 0x00270009, 0x0270009c,
        0x27000000, 0x70009c00, 0x0009c002, 0x009c0027, 0x00000270, 0x9c002700,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x01000040, 0x10000400, 0x00004000, 0x00040001, 0x00400010, 0x04000100,
        0x40001000, 0x00010000, 0x00100004, 0x01000040, 0x10000400, 0x00004000,
        0x00040001, 0x00400010, 0x04000100, 0x40001000, 0x00010000, 0x00100004,
        0x01000040, 0x10000400, 0x00004000, 0x00040001, 0x00400010, 0x04000100,
        0x40001000, 0x00010000, 0x00100004, 0x01000040, 0x00000400, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800020, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00080002,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800020, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00080002,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00880022, 0x08800220, 0x88002200, 0x80022000, 0x00220008, 0x02200088,
        0x22000880, 0x20008800, 0x00088002, 0x00880022, 0x08800220, 0x88002200,
        0x80022000, 0x00220008, 0x02200088, 0x22000880, 0x20008800, 0x00088002,
        0x00880022, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 18,
    default: 0,
};

pub(crate) static TOTITLE: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000d, 0x000e, 0x000f,
        0x0010, 0x0011, 0x0012, 0x0013, 0xffff, 0xffff, 0x0014, 0x0015, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0016, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0017, 0x0018, 0x0019, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001a, 0x001b, 0x001c, 0x001d,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001e, 0x001f, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0020, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0021, 0x0022, 0xffff, 0x0023, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0024, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0025, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0026, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0027, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff800000, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0x0000003f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x9c000000,
        0x0000000b, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe00000, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0x001e7ffe,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfc600000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0xfff00000, 0xff00003f, 0xf00003ff, 0x00003fff,
        0x0003ffff, 0x003ffff0, 0x03ffff00, 0x3ffff000, 0xffff0000, 0x00000003,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0xfff00000, 0xff00003f, 0xf00003ff, 0xffb53fff,
        0x000000c3, 0xffc00000, 0xfc0000ff, 0x00000fff, 0xffff0000, 0x00000003,
        0xff000000, 0x000003ff, 0x00000000, 0x00000000, 0x003ffff0, 0x84000000,
        0x00000001, 0x00000000, 0x0a3ffffc, 0x00000000, 0x20000000, 0x00000008,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0x00000fff, 0xffff0000, 0x00000003,
        0x00000000, 0x0ffffc00, 0x00000000, 0x0003ffff, 0x00000000, 0x03ffff00,
        0x3ffff000, 0x00000000, 0x000ffffc, 0x00000000, 0x0ffffc00, 0x000e0000,
        0x00000000, 0x00000000, 0x00000100, 0x7ffff000, 0x00000000, 0x001ffffc,
        0xff000000, 0xf00003ff, 0x00003fff, 0x0003ffff, 0x003ffff0, 0x03ffff00,
        0x3ffff000, 0xffff0000, 0xfff00003, 0xff00003f, 0x0ffec7ff, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0x00040000, 0xffc00000, 0xfc0000ff,
        0x00000fff, 0x00000000, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0x00000000, 0xffc00000, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0x000000ff,
        0x00000000, 0x00000000, 0x00000000, 0xff000000, 0x000003ff, 0x0a8fc000,
        0x00002a3f, 0x003ffff0, 0x00000000, 0xc0000000, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xa8702a1f, 0xcb82a1e0, 0x03ff32ff,
        0xfff33000, 0x0000ffcc, 0x000ffcd8, 0x4fffcd40, 0x000000a5, 0x00000000,
        0x952fff33, 0xcc400002, 0xa00000ff, 0x0a544294, 0xff2f0000, 0x544ffcb7,
        0x410a7dca, 0x000000a5, 0xffcb4000, 0xa7f40000, 0x003ff2b0, 0xa8000000,
        0x00000ffc, 0x00000000, 0x00000000, 0x00000000, 0x00a79c00, 0x00000000,
        0x0003ff26, 0xc98a5430, 0x000000ff, 0x80000000, 0xff26294a, 0xf27ffeef,
        0xb9ffc9ff, 0x000003ff, 0x00000000, 0x00000000, 0x003ff250, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x22945400, 0x00000a51,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x50000000, 0x00000001, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xfffc0000, 0xffc0000f, 0x000000ff,
        0xc0000000, 0x0000ffff, 0x00000000, 0x82002080, 0x00020800, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xda000000, 0xbfff6fff, 0xfff6fffd, 0xff800000, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0xfff83ffe,
        0xff83ffe0, 0xf83ffe1f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xc0fff83f, 0x1fff07ff, 0x00003ffc, 0xff1fffc2, 0x0000000f, 0x44000000,
        0x3ffcafff, 0x0000fffe, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfec3ffaa, 0xe300007f, 0x800000ff,
        0x00000ffe, 0xffff0000, 0x00000003, 0x00ffffc0, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0xfff83ffe,
        0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xfec3ffb0, 0xec3ffb0f, 0xc3ffb0ff,
        0x3ffb0ffe, 0xffb0ffec, 0xfb0ffec3, 0xb0ffec3f, 0x0ffec3ff, 0xffec3ffb,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0x0000000f, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0x00000000, 0x003ffff0, 0x03ffff00, 0x3ffff000, 0xffff0000, 0xfff00003,
        0xff00003f, 0xf00003ff, 0xfffc7fff, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff400000, 0xf43ffd0f, 0x43ffd0ff, 0x3ffd0fff, 0xffd0fff4, 0xfd0fff43,
        0xd0fff43f, 0x0fff43ff, 0xfff43ffd, 0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff,
        0x3ffd0fff, 0xffd0fff4, 0xfd0fff43, 0xd0fff43f, 0x0fff43ff, 0xfff43ffd,
        0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff, 0x3ffd0fff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x0fffe3ff, 0x00000000,
        0x9e4fe792, 0xe7be79cf, 0x77e79ef9, 0xfe7a4f9e, 0x89c2f9f6, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00022810, 0x00000000, 0x003b9800, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x80000000, 0x000008a3, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0x00000fff, 0x00000000, 0x00000000, 0x00fff140, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x02000080, 0x20000800,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x02000080, 0x20000800,
        0x00008000, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200000, 0x02000000, 0x20000000,
        0x00000000, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0128004a, 0x15800560, 0x58005600,
        0x00064001, 0x00800019, 0x07000200, 0x7e001c00, 0x0001f800, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x02000080, 0x20000800,
        0x00008000, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x02400000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xb0000000, 0x00003e3d,
        0x00000000, 0x02400000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00200008, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00200008, 0x00000000, 0x1c000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x02400000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x40000000, 0x00003ffe, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xffc3fff0, 0xfc3fff0f, 0xc3fff0ff,
        0x3fff0fff, 0xfff0fffc, 0xff0fffc3, 0xf0fffc3f, 0x0fffc3ff, 0xfffc3fff,
        0x00000000, 0x00000000, 0x03ffff00, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xff9bffe6, 0xf9bffe6f, 0x9bffe6ff,
        0xbffe6fff, 0xffe6fff9, 0xfe6fff9b, 0xe6fff9bf, 0x6fff9bff, 0xfff9bffe,
        0xff9bffe6, 0xf9bffe6f, 0x9bffe6ff, 0xbffe6fff, 0xffe6fff9, 0x000fff9b,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff,
        0x3ffd0fff, 0xffd0fff4, 0xfd0fff43, 0xd0fff43f, 0x0fff43ff, 0xfff43ffd,
        0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff, 0x3ffd0fff, 0xffd0fff4, 0xfd0fff43,
        0xd0fff43f, 0x0fff43ff, 0xfff43ffd, 0xff43ffd0, 0xf43ffd0f, 0x43ffd0ff,
        0x3ffd0fff, 0xffd0fff4, 0xfd0fff43, 0xd0fff43f, 0x0fff43ff, 0xfff43ffd,
        0xfffc0000, 0x0000000f, 0x54000000, 0x3d5d8f57, 0xffff0000, 0xfff00003,
        0xff00003f, 0x000003ff, 0x00000000, 0x00000000, 0xffc00000, 0x000000ff,
        0x3ffff000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0x000000ff, 0x00000000, 0x00000000, 0x00000000,
        0xff000000, 0xf00003ff, 0x00003fff, 0x00000000, 0xffc00000, 0x000000ff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x8e83e3a0, 0xe83e3a0f, 0x83e3a0f8, 0x3e3a0f8e, 0xe3a0f8e8, 0x3a0f8e83,
        0xa0f8e83e, 0x0f8e83e3, 0xf8e83e3a, 0x8e83e3a0, 0xe83e3a0f, 0x83e3a0f8,
        0x3e3a0f8e, 0xe3a0f8e8, 0x3a0f8e83, 0xa0f8e83e, 0x0f8e83e3, 0xf8e83e3a,
        0x8e83e3a0, 0xe83e3a0f, 0x83e3a0f8, 0x00000f8e, 0x0000f8e8, 0x00000000,
        0x00000000, 0x0f8e8000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xffc00000, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0x00000000, 0xffc00000, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0xfffc0000, 0xffc0000f, 0xfc0000ff,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00ffffc0, 0x0ffffc00, 0xffffc000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xfff00000, 0xff00003f, 0x000003ff, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x00000000,
        0xff000000, 0x000003ff, 0x00000000, 0xfffc0000, 0xffc0000f, 0x000030ff,
        0xc0000000, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0xfc0000ff, 0xc0000fff, 0x0000ffff, 0x000ffffc,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfc000000,
        0xc0000fff, 0x0000ffff, 0x000ffffc, 0x00ffffc0, 0x0ffffc00, 0xffffc000,
        0xfffc0000, 0xffc0000f, 0x000000ff, 0x00000000, 0xffff0000, 0xfff00003,
        0x0000003f, 0x00000000, 0x00000000, 0xfffc0000, 0x0000000f, 0x00000000,
        0xc0000000, 0x0000ffff, 0x000ffffc, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x3ffff000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18000000, 0x000000ff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0xa0c36830, 0x0c36830d, 0xc36830da, 0x36830da0, 0x6830da0c, 0x830da0c3,
        0x30da0c36, 0x0da0c368, 0xda0c3683, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0xa0c36830, 0x0c36830d, 0xc36830da, 0x36830da0, 0x6830da0c, 0x830da0c3,
        0x30da0c36, 0x0da0c368, 0xda0c3683, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff800000, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0x0000003f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffd80000, 0xfd8fff63,
        0xd8fff63f, 0x8fff63ff, 0xfff63ffd, 0xff63ffd8, 0xf63ffd8f, 0x63ffd8ff,
        0x3ffd8fff, 0xffd8fff6, 0xfd8fff63, 0xd8fff63f, 0x8fff63ff, 0xfff63ffd,
        0xff63ffd8, 0xf63ffd8f, 0x63ffd8ff, 0x3ffd8fff, 0xffd8fff6, 0xfd8fff63,
        0xd8fff63f, 0x8fff63ff, 0xfff63ffd, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xffd80000, 0xfd8fff63, 0xd8fff63f, 0x8fff63ff, 0xfff63ffd,
        0xff63ffd8, 0xf63ffd8f, 0x63ffd8ff, 0x3ffd8fff, 0xffd8fff6, 0xfd8fff63,
        0xd8fff63f, 0x8fff63ff, 0xfff63ffd, 0xff63ffd8, 0xf63ffd8f, 0x63ffd8ff,
        0x3ffd8fff, 0xffd8fff6, 0xfd8fff63, 0x00fff63f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x40000000, 0xffd9fff6, 0xfd9fff67, 0xd9fff67f, 0x9fff67ff, 0xfff67ffd,
        0xff67ffd9, 0xf640000f, 0x67ffd9ff, 0x7ffd9fff, 0xffd9fff6, 0xfd9fff67,
        0xd9fff67f, 0x9fff67ff, 0xfff67ffd, 0xff67ffd9, 0xf640000f, 0x67ffd9ff,
        0x7ffd9fff, 0xffd9fff6, 0x000fff67, 0xd9fff640, 0x000003ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff03ffc0, 0xf03ffc0f, 0x03ffc0ff, 0x3ffc0fff, 0xffc0fff0, 0xfc0fff03,
        0xc0fff03f, 0x0fff03ff, 0xfff03ffc, 0xff03ffc0, 0xf03ffc0f, 0x03ffc0ff,
        0x3ffc0fff, 0xffc0fff0, 0xfc0fff03, 0xc0fff03f, 0x0fff03ff, 0xfff03ffc,
        0xff03ffc0, 0xf03ffc0f, 0x03ffc0ff, 0x3ffc0fff, 0xffc0fff0, 0xfc0fff03,
        0xc0fff03f, 0x0fff03ff, 0xfff03ffc, 0xff03ffc0, 0x003ffc0f, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0xfff83ffe,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff, 0x3ffe0fff, 0xffe0fff8, 0xfe0fff83,
        0xe0fff83f, 0x0fff83ff, 0xfff83ffe, 0xff83ffe0, 0xf83ffe0f, 0x83ffe0ff,
        0x3ffe0fff, 0xffe0fff8, 0xfe0fff83, 0xe0fff83f, 0x0fff83ff, 0xfff83ffe,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xf7bffde0, 0x7bffdeff, 0xbffdefff, 0xffdefff7, 0xfdefff7b,
        0xdefff7bf, 0xefff7bff, 0xfff7bffd, 0xff7bffde, 0xf7bffdef, 0x7bffdeff,
        0xbffdefff, 0xffdefff7, 0xfdefff7b, 0xdefff7bf, 0xefff7bff, 0xfff7bffd,
        0xff7bffde, 0xf7bffdef, 0x000000ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 18,
    default: 0,
};

pub(crate) static TOCASEFOLD: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0xffff, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000a, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x000b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff,
        0x000d, 0x000e, 0x000f, 0x0010, 0xffff, 0xffff, 0x0011, 0x0012, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0013, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0014, 0x0015, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0016, 0x0017, 0x0018, 0x0019,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001a, 0x001b, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x001d, 0x001e, 0x001f, 0x0020, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0021, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0023, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0024, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800000, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x1c000000,
        0x0000000c, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800020, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200000, 0x02000080, 0x20000800, 0x00008000, 0x00000002,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000000, 0x00000010, 0x00000100,
        0x00001000, 0x00000000, 0x00000004, 0x00000040, 0x00000400, 0x00004000,
        0x00040000, 0x00400000, 0x04000000, 0x40000000, 0x00000000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0xff870000, 0x00000007, 0x00000040, 0x00000400, 0xffbd0000,
        0x03480000, 0x00000010, 0x00000100, 0x400ce000, 0x00000000, 0x0cd00334,
        0x00000040, 0xf0000000, 0x00328004, 0x000400cb, 0x33400000, 0x0000cf00,
        0x400d3000, 0x00010034, 0x00000000, 0xd3000000, 0x00035400, 0x00358000,
        0x00000001, 0x00000010, 0x00000100, 0x400da000, 0x00000000, 0x00000368,
        0x01000000, 0xa0000000, 0x0000400d, 0x03640000, 0x00400d90, 0x04000000,
        0xc0000000, 0x00010036, 0x00000000, 0x01000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x04000200, 0x80000000, 0x00010000, 0x00200000,
        0x00000040, 0x00000400, 0x00004000, 0x00040000, 0x00400000, 0x04000000,
        0x40000000, 0x00000000, 0x00000004, 0x00000040, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00080000, 0x00000010, 0x00000100,
        0x3ff9f000, 0x0001fff2, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x0003ff7e, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000000,
        0x00000000, 0x00000000, 0xa2b00000, 0x00000042, 0x8ffd7400, 0x000002a2,
        0x00040000, 0xcf400000, 0x1c0045ff, 0x00001001, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xd0000000, 0x00000001, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000010, 0x00000000,
        0x00001000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x001d0000,
        0x00000000, 0x00000000, 0x00000000, 0x00026000, 0x00250000, 0x02500094,
        0x40000000, 0xf0000000, 0x000fc003, 0x00800000, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00080002,
        0x00800020, 0x08000000, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x00000800, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000010, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00020000, 0xff9fffe2, 0x0000000f, 0xc4000000,
        0x3ffeafff, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0xff43ffca, 0x0000000f, 0x03ffc400,
        0x40000fff, 0x00000000, 0x001fffe4, 0x00000000, 0xeffdf800, 0xffdfbff7,
        0x01400050, 0x14000500, 0x40005000, 0x00050001, 0x00500014, 0x05000140,
        0x50001400, 0x00014000, 0x00140005, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00080002,
        0x00800020, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x0004000f, 0x00400000, 0x04000000, 0x40000000, 0x00000000, 0x00000004,
        0x00000040, 0x00000400, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00c00000, 0x0c000300, 0xc0003000,
        0x00030000, 0x0030000c, 0x030000c0, 0x30000c00, 0x0000c000, 0x000c0003,
        0x00c00030, 0x0c000300, 0xc0003000, 0x00030000, 0x0030000c, 0x030000c0,
        0x30000c00, 0x0000c000, 0x000c0003, 0x00c00030, 0x0c000300, 0xc0003000,
        0x00030000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x71801c60, 0x1801c600, 0x801c6007, 0x01c60071, 0x1c600718, 0xc6007180,
        0x60071801, 0x0071801c, 0x071801c6, 0x71801c60, 0x1801c600, 0x801c6007,
        0x01c60071, 0x1c600718, 0xc6007180, 0x60071801, 0x0071801c, 0x071801c6,
        0x71801c60, 0x1801c600, 0x801c6007, 0x00000071, 0x00000718, 0x00000000,
        0x00000000, 0x00718000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x0fffe3ff, 0x00000000,
        0x9ecfe7b2, 0xefbe7bcf, 0xf7e7bef9, 0x3e7c4f9e, 0x89c3f9f7, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xd103f440, 0x103f440f, 0x03f440fd,
        0x3f440fd1, 0xf440fd10, 0x440fd103, 0x40fd103f, 0x0fd103f4, 0xfd103f44,
        0xd103f440, 0x103f440f, 0x03f440fd, 0x3f440fd1, 0xf440fd10, 0x440fd103,
        0x40fd103f, 0x0fd103f4, 0xfd103f44, 0xd103f440, 0x103f440f, 0x03f440fd,
        0x3f440fd1, 0xf440fd10, 0x440fd103, 0x0000003f, 0x0fd10000, 0xfd103f44,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00000000, 0x00000000, 0x00000000, 0x00fff180, 0x10000000, 0x00003e24,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x0fffe3ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x0fffe3ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x000fffe0, 0x00fffe00, 0x0fffe000, 0xfffe0000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xff8fffe3, 0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xff8fffe3,
        0xf8fffe3f, 0x8fffe3ff, 0xfffe3fff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xfb6fffe3, 0xf7ffedbf, 0xb00003ff, 0x00003e3f,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffaa0000, 0xfaaffeab,
        0xf7ffeabf, 0x000003ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80000, 0xf9cfffe3, 0x00ffe73f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff80000, 0xf90fffe3,
        0xf9ffe43f, 0x000003ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xff800000, 0xf82ffe03, 0xf7ffe0bf, 0x000003ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3e2a3000, 0x00000000, 0xf4100000,
        0x00f7eebd, 0x00000000, 0x00000000, 0x00000000, 0x000001c0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00400010, 0x04000100, 0x40001000, 0x00010000, 0x00100004, 0x01000040,
        0x10000400, 0x00004000, 0x00040001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00400000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x8001a000, 0x001a0006, 0x01a00068, 0x1a000680, 0xa0006800, 0x00068001,
        0x0068001a, 0x068001a0, 0x68001a00, 0x8001a000, 0x001a0006, 0x01a00068,
        0x1a000680, 0xa0006800, 0x00068001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00c00030, 0x0c000300, 0xc0003000, 0x00030000, 0x0030000c, 0x030000c0,
        0x30000c00, 0x0000c000, 0x000c0003, 0x00c00030, 0x0c000300, 0xc0003000,
        0x00030000, 0x0030000c, 0x030000c0, 0x30000c00, 0x0000c000, 0x000c0003,
        0x00c00030, 0x0c000300, 0xc0003000, 0x00030000, 0x0030000c, 0x030000c0,
        0x30000c00, 0x0000c000, 0x000c0003, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x46bd6090, 0x03d619fc, 0x40000000, 0x00000000, 0x00000004,
        0x00000040, 0x3f579000, 0xf5787d60, 0x0003d5e2, 0x00000010, 0x04000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10000000, 0xf5707d5c,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000040, 0x00000400, 0x00000000, 0x00000000, 0x00000010, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000000, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000001, 0x00000010, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0x00100000,
        0x01000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000004, 0x00000040, 0x1dd7f000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00000000, 0x00000000,
        0x00000040, 0x0d6b6000, 0x00000000, 0x00000001, 0x00000010, 0x00000000,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0x00000100, 0x00001000, 0x00010000, 0xabc00000,
        0xb5d6ac75, 0xcd6aff5a, 0x000035ab, 0x6b5b5aee, 0xe835aebd, 0x00000100,
        0x00001000, 0x00010000, 0x00100000, 0x01000000, 0x10000000, 0x00000000,
        0x00000001, 0x00000010, 0xf7ffd000, 0x775c8d6a, 0x00000000, 0x00000004,
        0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000000, 0x00000000,
        0x00001000, 0x00010000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0xa0c36830, 0x0c36830d, 0xc36830da, 0x36830da0, 0x6830da0c, 0x830da0c3,
        0x30da0c36, 0x0da0c368, 0xda0c3683, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0xa0c36830, 0x0c36830d, 0xc36830da, 0x36830da0, 0x6830da0c, 0x830da0c3,
        0x30da0c36, 0x0da0c368, 0xda0c3683, 0xa0c36830, 0x0c36830d, 0xc36830da,
        0x36830da0, 0x6830da0c, 0x830da0c3, 0x30da0c36, 0x0da0c368, 0xda0c3683,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800000, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00a00028, 0x0a000280, 0xa0002800, 0x00028000, 0x0028000a, 0x028000a0,
        0x28000a00, 0x8000a000, 0x000a0002, 0x00a00028, 0x0a000280, 0xa0002800,
        0x00028000, 0x0028000a, 0x028000a0, 0x28000a00, 0x8000a000, 0x000a0002,
        0x00a00028, 0x0a000280, 0xa0002800, 0x00028000, 0x0000000a, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00a00028, 0x0a000280, 0xa0002800,
        0x00028000, 0x0028000a, 0x028000a0, 0x28000a00, 0x8000a000, 0x000a0002,
        0x00a00028, 0x0a000280, 0xa0002800, 0x00028000, 0x0028000a, 0x028000a0,
        0x28000a00, 0x8000a000, 0x000a0002, 0x00a00028, 0x0a000280, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x009c0027, 0x09c00270, 0x9c002700,
        0xc0027000, 0x00270009, 0x0270009c, 0x27000000, 0x70009c00, 0x0009c002,
        0x009c0027, 0x09c00270, 0x9c002700, 0xc0027000, 0x00270009, 0x0270009c,
        0x27000000, 0x70009c00, 0x0009c002, 0x009c0027, 0x00000270, 0x9c002700,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x01000040, 0x10000400, 0x00004000, 0x00040001, 0x00400010, 0x04000100,
        0x40001000, 0x00010000, 0x00100004, 0x01000040, 0x10000400, 0x00004000,
        0x00040001, 0x00400010, 0x04000100, 0x40001000, 0x00010000, 0x00100004,
        0x01000040, 0x10000400, 0x00004000, 0x00040001, 0x00400010, 0x04000100,
        0x40001000, 0x00010000, 0x00100004, 0x01000040, 0x00000400, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800020, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00080002,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00800020, 0x08000200, 0x80002000, 0x00020000, 0x00200008, 0x02000080,
        0x20000800, 0x00008000, 0x00080002, 0x00800020, 0x08000200, 0x80002000,
        0x00020000, 0x00200008, 0x02000080, 0x20000800, 0x00008000, 0x00080002,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00880022, 0x08800220, 0x88002200, 0x80022000, 0x00220008, 0x02200088,
        0x22000880, 0x20008800, 0x00088002, 0x00880022, 0x08800220, 0x88002200,
        0x80022000, 0x00220008, 0x02200088, 0x22000880, 0x20008800, 0x00088002,
        0x00880022, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 18,
    default: 0,
};

pub(crate) static SPECIAL_UPPER: [(u32, &[u32]); 102] = [
    (0x00DF, &[0x0053, 0x0053]),
    (0x0149, &[0x02BC, 0x004E]),
    (0x01F0, &[0x004A, 0x030C]),
    (0x0390, &[0x0399, 0x0308, 0x0301]),
    (0x03B0, &[0x03A5, 0x0308, 0x0301]),
    (0x0587, &[0x0535, 0x0552]),
    (0x1E96, &[0x0048, 0x0331]),
    (0x1E97, &[0x0054, 0x0308]),
    (0x1E98, &[0x0057, 0x030A]),
    (0x1E99, &[0x0059, 0x030A]),
    (0x1E9A, &[0x0041, 0x02BE]),
    (0x1F50, &[0x03A5, 0x0313]),
    (0x1F52, &[0x03A5, 0x0313, 0x0300]),
    (0x1F54, &[0x03A5, 0x0313, 0x0301]),
    (0x1F56, &[0x03A5, 0x0313, 0x0342]),
    (0x1F80, &[0x1F08, 0x0399]),
    (0x1F81, &[0x1F09, 0x0399]),
    (0x1F82, &[0x1F0A, 0x0399]),
    (0x1F83, &[0x1F0B, 0x0399]),
    (0x1F84, &[0x1F0C, 0x0399]),
    (0x1F85, &[0x1F0D, 0x0399]),
    (0x1F86, &[0x1F0E, 0x0399]),
    (0x1F87, &[0x1F0F, 0x0399]),
    (0x1F88, &[0x1F08, 0x0399]),
    (0x1F89, &[0x1F09, 0x0399]),
    (0x1F8A, &[0x1F0A, 0x0399]),
    (0x1F8B, &[0x1F0B, 0x0399]),
    (0x1F8C, &[0x1F0C, 0x0399]),
    (0x1F8D, &[0x1F0D, 0x0399]),
    (0x1F8E, &[0x1F0E, 0x0399]),
    (0x1F8F, &[0x1F0F, 0x0399]),
    (0x1F90, &[0x1F28, 0x0399]),
    (0x1F91, &[0x1F29, 0x0399]),
    (0x1F92, &[0x1F2A, 0x0399]),
    (0x1F93, &[0x1F2B, 0x0399]),
    (0x1F94, &[0x1F2C, 0x0399]),
    (0x1F95, &[0x1F2D, 0x0399]),
    (0x1F96, &[0x1F2E, 0x0399]),
    (0x1F97, &[0x1F2F, 0x0399]),
    (0x1F98, &[0x1F28, 0x0399]),
    (0x1F99, &[0x1F29, 0x0399]),
    (0x1F9A, &[0x1F2A, 0x0399]),
    (0x1F9B, &[0x1F2B, 0x0399]),
    (0x1F9C, &[0x1F2C, 0x0399]),
    (0x1F9D, &[0x1F2D, 0x0399]),
    (0x1F9E, &[0x1F2E, 0x0399]),
    (0x1F9F, &[0x1F2F, 0x0399]),
    (0x1FA0, &[0x1F68, 0x0399]),
    (0x1FA1, &[0x1F69, 0x0399]),
    (0x1FA2, &[0x1F6A, 0x0399]),
    (0x1FA3, &[0x1F6B, 0x0399]),
    (0x1FA4, &[0x1F6C, 0x0399]),
    (0x1FA5, &[0x1F6D, 0x0399]),
    (0x1FA6, &[0x1F6E, 0x0399]),
    (0x1FA7, &[0x1F6F, 0x0399]),
    (0x1FA8, &[0x1F68, 0x0399]),
    (0x1FA9, &[0x1F69, 0x0399]),
    (0x1FAA, &[0x1F6A, 0x0399]),
    (0x1FAB, &[0x1F6B, 0x0399]),
    (0x1FAC, &[0x1F6C, 0x0399]),
    (0x1FAD, &[0x1F6D, 0x0399]),
    (0x1FAE, &[0x1F6E, 0x0399]),
    (0x1FAF, &[0x1F6F, 0x0399]),
    (0x1FB2, &[0x1FBA, 0x0399]),
    (0x1FB3, &[0x0391, 0x0399]),
    (0x1FB4, &[0x0386, 0x0399]),
    (0x1FB6, &[0x0391, 0x0342]),
    (0x1FB7, &[0x0391, 0x0342, 0x0399]),
    (0x1FBC, &[0x0391, 0x0399]),
    (0x1FC2, &[0x1FCA, 0x0399]),
    (0x1FC3, &[0x0397, 0x0399]),
    (0x1FC4, &[0x0389, 0x0399]),
    (0x1FC6, &[0x0397, 0x0342]),
    (0x1FC7, &[0x0397, 0x0342, 0x0399]),
    (0x1FCC, &[0x0397, 0x0399]),
    (0x1FD2, &[0x0399, 0x0308, 0x0300]),
    (0x1FD3, &[0x0399, 0x0308, 0x0301]),
    (0x1FD6, &[0x0399, 0x0342]),
    (0x1FD7, &[0x0399, 0x0308, 0x0342]),
    (0x1FE2, &[0x03A5, 0x0308, 0x0300]),
    (0x1FE3, &[0x03A5, 0x0308, 0x0301]),
    (0x1FE4, &[0x03A1, 0x0313]),
    (0x1FE6, &[0x03A5, 0x0342]),
    (0x1FE7, &[0x03A5, 0x0308, 0x0342]),
    (0x1FF2, &[0x1FFA, 0x0399]),
    (0x1FF3, &[0x03A9, 0x0399]),
    (0x1FF4, &[0x038F, 0x0399]),
    (0x1FF6, &[0x03A9, 0x0342]),
    (0x1FF7, &[0x03A9, 0x0342, 0x0399]),
    (0x1FFC, &[0x03A9, 0x0399]),
    (0xFB00, &[0x0046, 0x0046]),
    (0xFB01, &[0x0046, 0x0049]),
    (0xFB02, &[0x0046, 0x004C]),
    (0xFB03, &[0x0046, 0x0046, 0x0049]),
    (0xFB04, &[0x0046, 0x0046, 0x004C]),
    (0xFB05, &[0x0053, 0x0054]),
    (0xFB06, &[0x0053, 0x0054]),
    (0xFB13, &[0x0544, 0x0546]),
    (0xFB14, &[0x0544, 0x0535]),
    (0xFB15, &[0x0544, 0x053B]),
    (0xFB16, &[0x054E, 0x0546]),
    (0xFB17, &[0x0544, 0x053D]),
];

pub(crate) static SPECIAL_LOWER: [(u32, &[u32]); 1] = [
    (0x0130, &[0x0069, 0x0307]),
];

pub(crate) static SPECIAL_TITLE: [(u32, &[u32]); 48] = [
    (0x00DF, &[0x0053, 0x0073]),
    (0x0149, &[0x02BC, 0x004E]),
    (0x01F0, &[0x004A, 0x030C]),
    (0x0390, &[0x0399, 0x0308, 0x0301]),
    (0x03B0, &[0x03A5, 0x0308, 0x0301]),
    (0x0587, &[0x0535, 0x0582]),
    (0x1E96, &[0x0048, 0x0331]),
    (0x1E97, &[0x0054, 0x0308]),
    (0x1E98, &[0x0057, 0x030A]),
    (0x1E99, &[0x0059, 0x030A]),
    (0x1E9A, &[0x0041, 0x02BE]),
    (0x1F50, &[0x03A5, 0x0313]),
    (0x1F52, &[0x03A5, 0x0313, 0x0300]),
    (0x1F54, &[0x03A5, 0x0313, 0x0301]),
    (0x1F56, &[0x03A5, 0x0313, 0x0342]),
    (0x1FB2, &[0x1FBA, 0x0345]),
    (0x1FB4, &[0x0386, 0x0345]),
    (0x1FB6, &[0x0391, 0x0342]),
    (0x1FB7, &[0x0391, 0x0342, 0x0345]),
    (0x1FC2, &[0x1FCA, 0x0345]),
    (0x1FC4, &[0x0389, 0x0345]),
    (0x1FC6, &[0x0397, 0x0342]),
    (0x1FC7, &[0x0397, 0x0342, 0x0345]),
    (0x1FD2, &[0x0399, 0x0308, 0x0300]),
    (0x1FD3, &[0x0399, 0x0308, 0x0301]),
    (0x1FD6, &[0x0399, 0x0342]),
    (0x1FD7, &[0x0399, 0x0308, 0x0342]),
    (0x1FE2, &[0x03A5, 0x0308, 0x0300]),
    (0x1FE3, &[0x03A5, 0x0308, 0x0301]),
    (0x1FE4, &[0x03A1, 0x0313]),
    (0x1FE6, &[0x03A5, 0x0342]),
    (0x1FE7, &[0x03A5, 0x0308, 0x0342]),
    (0x1FF2, &[0x1FFA, 0x0345]),
    (0x1FF4, &[0x038F, 0x0345]),
    (0x1FF6, &[0x03A9, 0x0342]),
    (0x1FF7, &[0x03A9, 0x0342, 0x0345]),
    (0xFB00, &[0x0046, 0x0066]),
    (0xFB01, &[0x0046, 0x0069]),
    (0xFB02, &[0x0046, 0x006C]),
    (0xFB03, &[0x0046, 0x0066, 0x0069]),
    (0xFB04, &[0x0046, 0x0066, 0x006C]),
    (0xFB05, &[0x0053, 0x0074]),
    (0xFB06, &[0x0053, 0x0074]),
    (0xFB13, &[0x0544, 0x0576]),
    (0xFB14, &[0x0544, 0x0565]),
    (0xFB15, &[0x0544, 0x056B]),
    (0xFB16, &[0x054E, 0x0576]),
    (0xFB17, &[0x0544, 0x056D]),
];

pub(crate) static SPECIAL_FOLD: [(u32, &[u32]); 104] = [
    (0x00DF, &[0x0073, 0x0073]),
    (0x0130, &[0x0069, 0x0307]),
    (0x0149, &[0x02BC, 0x006E]),
    (0x01F0, &[0x006A, 0x030C]),
    (0x0390, &[0x03B9, 0x0308, 0x0301]),
    (0x03B0, &[0x03C5, 0x0308, 0x0301]),
    (0x0587, &[0x0565, 0x0582]),
    (0x1E96, &[0x0068, 0x0331]),
    (0x1E97, &[0x0074, 0x0308]),
    (0x1E98, &[0x0077, 0x030A]),
    (0x1E99, &[0x0079, 0x030A]),
    (0x1E9A, &[0x0061, 0x02BE]),
    (0x1E9E, &[0x0073, 0x0073]),
    (0x1F50, &[0x03C5, 0x0313]),
    (0x1F52, &[0x03C5, 0x0313, 0x0300]),
    (0x1F54, &[0x03C5, 0x0313, 0x0301]),
    (0x1F56, &[0x03C5, 0x0313, 0x0342]),
    (0x1F80, &[0x1F00, 0x03B9]),
    (0x1F81, &[0x1F01, 0x03B9]),
    (0x1F82, &[0x1F02, 0x03B9]),
    (0x1F83, &[0x1F03, 0x03B9]),
    (0x1F84, &[0x1F04, 0x03B9]),
    (0x1F85, &[0x1F05, 0x03B9]),
    (0x1F86, &[0x1F06, 0x03B9]),
    (0x1F87, &[0x1F07, 0x03B9]),
    (0x1F88, &[0x1F00, 0x03B9]),
    (0x1F89, &[0x1F01, 0x03B9]),
    (0x1F8A, &[0x1F02, 0x03B9]),
    (0x1F8B, &[0x1F03, 0x03B9]),
    (0x1F8C, &[0x1F04, 0x03B9]),
    (0x1F8D, &[0x1F05, 0x03B9]),
    (0x1F8E, &[0x1F06, 0x03B9]),
    (0x1F8F, &[0x1F07, 0x03B9]),
    (0x1F90, &[0x1F20, 0x03B9]),
    (0x1F91, &[0x1F21, 0x03B9]),
    (0x1F92, &[0x1F22, 0x03B9]),
    (0x1F93, &[0x1F23, 0x03B9]),
    (0x1F94, &[0x1F24, 0x03B9]),
    (0x1F95, &[0x1F25, 0x03B9]),
    (0x1F96, &[0x1F26, 0x03B9]),
    (0x1F97, &[0x1F27, 0x03B9]),
    (0x1F98, &[0x1F20, 0x03B9]),
    (0x1F99, &[0x1F21, 0x03B9]),
    (0x1F9A, &[0x1F22, 0x03B9]),
    (0x1F9B, &[0x1F23, 0x03B9]),
    (0x1F9C, &[0x1F24, 0x03B9]),
    (0x1F9D, &[0x1F25, 0x03B9]),
    (0x1F9E, &[0x1F26, 0x03B9]),
    (0x1F9F, &[0x1F27, 0x03B9]),
    (0x1FA0, &[0x1F60, 0x03B9]),
    (0x1FA1, &[0x1F61, 0x03B9]),
    (0x1FA2, &[0x1F62, 0x03B9]),
    (0x1FA3, &[0x1F63, 0x03B9]),
    (0x1FA4, &[0x1F64, 0x03B9]),
    (0x1FA5, &[0x1F65, 0x03B9]),
    (0x1FA6, &[0x1F66, 0x03B9]),
    (0x1FA7, &[0x1F67, 0x03B9]),
    (0x1FA8, &[0x1F60, 0x03B9]),
    (0x1FA9, &[0x1F61, 0x03B9]),
    (0x1FAA, &[0x1F62, 0x03B9]),
    (0x1FAB, &[0x1F63, 0x03B9]),
    (0x1FAC, &[0x1F64, 0x03B9]),
    (0x1FAD, &[0x1F65, 0x03B9]),
    (0x1FAE, &[0x1F66, 0x03B9]),
    (0x1FAF, &[0x1F67, 0x03B9]),
    (0x1FB2, &[0x1F70, 0x03B9]),
    (0x1FB3, &[0x03B1, 0x03B9]),
    (0x1FB4, &[0x03AC, 0x03B9]),
    (0x1FB6, &[0x03B1, 0x0342]),
    (0x1FB7, &[0x03B1, 0x0342, 0x03B9]),
    (0x1FBC, &[0x03B1, 0x03B9]),
    (0x1FC2, &[0x1F74, 0x03B9]),
    (0x1FC3, &[0x03B7, 0x03B9]),
    (0x1FC4, &[0x03AE, 0x03B9]),
    (0x1FC6, &[0x03B7, 0x0342]),
    (0x1FC7, &[0x03B7, 0x0342, 0x03B9]),
    (0x1FCC, &[0x03B7, 0x03B9]),
    (0x1FD2, &[0x03B9, 0x0308, 0x0300]),
    (0x1FD3, &[0x03B9, 0x0308, 0x0301]),
    (0x1FD6, &[0x03B9, 0x0342]),
    (0x1FD7, &[0x03B9, 0x0308, 0x0342]),
    (0x1FE2, &[0x03C5, 0x0308, 0x0300]),
    (0x1FE3, &[0x03C5, 0x0308, 0x0301]),
    (0x1FE4, &[0x03C1, 0x0313]),
    (0x1FE6, &[0x03C5, 0x0342]),
    (0x1FE7, &[0x03C5, 0x0308, 0x0342]),
    (0x1FF2, &[0x1F7C, 0x03B9]),
    (0x1FF3, &[0x03C9, 0x03B9]),
    (0x1FF4, &[0x03CE, 0x03B9]),
    (0x1FF6, &[0x03C9, 0x0342]),
    (0x1FF7, &[0x03C9, 0x0342, 0x03B9]),
    (0x1FFC, &[0x03C9, 0x03B9]),
    (0xFB00, &[0x0066, 0x0066]),
    (0xFB01, &[0x0066, 0x0069]),
    (0xFB02, &[0x0066, 0x006C]),
    (0xFB03, &[0x0066, 0x0066, 0x0069]),
    (0xFB04, &[0x0066, 0x0066, 0x006C]),
    (0xFB05, &[0x0073, 0x0074]),
    (0xFB06, &[0x0073, 0x0074]),
    (0xFB13, &[0x0574, 0x0576]),
    (0xFB14, &[0x0574, 0x0565]),
    (0xFB15, &[0x0574, 0x056B]),
    (0xFB16, &[0x057E, 0x0576]),
    (0xFB17, &[0x0574, 0x056D]),
];

