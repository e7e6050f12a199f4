// This file is generated by scripts/gen-unicode-tables.pl. Do not edit.
// Unicode Character Database version 14.0.0.

#![allow(clippy::unreadable_literal)]

use super::trie::Trie;
use super::scripts::UcScript;
use super::blocks::UcBlock;
use super::joining::UcJoiningGroup;

pub const UNICODE_VERSION: &str = "14.0.0";

pub(crate) static CATEGORY: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0004, 0x0005, 0x0005,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b,
        0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017,
        0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x001f, 0x0020, 0x0021, 0x0022, 0x0022,
        0x0023, 0x0024, 0x0025, 0x0026, 0x0027, 0x0022, 0x0022, 0x0022, 0x0028, 0x0029, 0x002a, 0x002b,
        0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037,
        0x0038, 0x0039, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x0040, 0x0041, 0x0042,
        0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0045, 0x0048, 0x0049, 0x0045, 0x0045, 0x0040, 0x004a,
        0x0040, 0x0040, 0x004b, 0x004c, 0x004d, 0x004e, 0x004f, 0x0050, 0x0051, 0x0052, 0x0045, 0x0053,
        0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x0045, 0x0045, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x005a,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x005b, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x005c, 0x0022, 0x0022, 0x005d, 0x005e, 0x005f, 0x0060,
        0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0069,
        0x006a, 0x006a, 0x006a, 0x006a, 0x006a, 0x006a, 0x006a, 0x006a, 0x006a, 0x006a, 0x006a, 0x006a,
        0x006a, 0x006a, 0x006a, 0x006a, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x0022, 0x0022, 0x006c, 0x006d, 0x006e, 0x006f,
        0x0022, 0x0022, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079,
        0xffff, 0x007a, 0x007b, 0x007c, 0x007d, 0x007e, 0x007f, 0x0080, 0x0022, 0x0022, 0x0081, 0x0082,
        0x0083, 0x0084, 0x0085, 0x0086, 0x0087, 0x0088, 0x0089, 0x008a, 0x008b, 0x008c, 0x008d, 0xffff,
        0x008e, 0x008f, 0x0090, 0x0091, 0x0092, 0x0093, 0x0094, 0x0095, 0x0096, 0x0097, 0x0098, 0xffff,
        0x0099, 0x009a, 0xffff, 0x009b, 0x009c, 0x009d, 0x009e, 0xffff, 0x009f, 0x00a0, 0x00a1, 0x00a2,
        0x00a3, 0x00a4, 0xffff, 0xffff, 0x00a5, 0x00a6, 0x00a7, 0x00a8, 0xffff, 0x00a9, 0xffff, 0x00aa,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x00ab, 0x00ac, 0x0022, 0x00ad, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00ae, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x00af, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0022, 0x0022, 0x0022, 0x0022, 0x00b0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0022, 0x0022, 0x0022, 0x0022, 0x00b1, 0x00b2, 0x00b3, 0x00b4, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00b5, 0x00b6, 0x00b7, 0x00b8, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x00b9, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x00ba, 0x00bb, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00bc,
        0x0022, 0x0022, 0x00bd, 0x0022, 0x0022, 0x00be, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00bf, 0x00c0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x00c1, 0x00c2, 0x0045, 0x00c3, 0x00c4, 0x00c5, 0x00c6, 0x00c7, 0x00c8, 0xffff,
        0x00c9, 0x00ca, 0x00cb, 0x00cc, 0x00cd, 0x00ce, 0x00cf, 0x00d0, 0x0045, 0x0045, 0x0045, 0x0045,
        0x00d1, 0x00d2, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00d3, 0xffff,
        0x00d4, 0xffff, 0x00d5, 0xffff, 0xffff, 0x00d6, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00d7, 0x0022, 0x00d8, 0x00d9, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00da, 0x00db, 0x00dc, 0xffff, 0x00dd, 0x00de, 0xffff, 0xffff, 0x00df, 0x00e0, 0x00e1, 0x00e2,
        0x00e3, 0xffff, 0x0045, 0x00e4, 0x0045, 0x0045, 0x0045, 0x0045, 0x0045, 0x00e5, 0x00e6, 0x00e7,
        0x00e8, 0x00e9, 0x0045, 0x0045, 0x00ea, 0x00eb, 0x0045, 0x00ec, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x00ed, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x00ee, 0x0022,
        0x00ef, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x00f0, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x00f1, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0x0022, 0x0022, 0x0022,
        0x00f2, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022, 0x0022,
        0x0022, 0x0022, 0x00f3, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00f4, 0xffff, 0x00f5, 0x00f6,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x00f7,
    ],
    level3: &[
        0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c, 0xce739ce7, 0x6338c636,
        0x1945cd8c, 0x21088c59, 0x08421084, 0x8ca528c5, 0x00000011, 0x00000000,
        0x00000000, 0x00000000, 0x5d1d1680, 0x42108434, 0x10842108, 0x84210842,
        0x21084210, 0xcc9d2684, 0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c,
        0xce739ce7, 0x6739ce36, 0x2792b48d, 0x2a55a575, 0x548c4345, 0x8a94a811,
        0x00000000, 0x00000000, 0x00000000, 0x00900000, 0x08000000, 0x42108421,
        0x10842108, 0x84210842, 0x21904210, 0x08421084, 0x02008020, 0x00802008,
        0x80200802, 0x20080200, 0x08020080, 0x02008020, 0x00802008, 0x80200802,
        0x01080200, 0x00401004, 0x40100401, 0x00802100, 0x80200802, 0x20080200,
        0x08020080, 0x02008020, 0x00802008, 0x80200802, 0x00080200, 0x08401004,
        0x02008001, 0x10000100, 0x04000002, 0x20000200, 0x00400084, 0x02008020,
        0x00840100, 0x00010002, 0x20004010, 0x08420204, 0x44021084, 0x11002200,
        0x04010040, 0x01004010, 0x08021004, 0x02008020, 0x00802008, 0x88010802,
        0x20000200, 0x08020080, 0x02008020, 0x00802008, 0x80200802, 0x20080200,
        0x08020080, 0x02008020, 0x00802008, 0x80200802, 0x21084210, 0x08001000,
        0x00000401, 0x00802008, 0x84210802, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084240, 0x08421084, 0x42108421, 0x10842108, 0x8c630842,
        0x6318c631, 0x18c6318c, 0xe94a5063, 0x318c6318, 0x506318c6, 0x94a5294a,
        0xa5294a52, 0x28318c63, 0x3a5294a5, 0x5294a0e8, 0x94a5294a, 0xa5294a52,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x8020294a,
        0xbd082830, 0x0442108f, 0x294ef7bd, 0x0e800088, 0x0001003a, 0x00000000,
        0x00000000, 0x00007400, 0x10000000, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x00210042, 0x20084200, 0x08020080, 0x02008020,
        0x00802008, 0x84210802, 0x01048200, 0x00001080, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210000,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x02008020, 0x00802008, 0x80200802, 0x20080200, 0x08020080,
        0x4a52d420, 0x0080e729, 0x80200802, 0x20080200, 0x08020080, 0x02008020,
        0x00802008, 0x80200802, 0x20080200, 0x08020080, 0x40100400, 0x10040100,
        0x80200840, 0x20080200, 0x08020080, 0x02008020, 0x00802008, 0x80200802,
        0x20080200, 0x08020080, 0x02008020, 0x00802008, 0x80200802, 0x20080200,
        0x08020080, 0x02008020, 0x00802008, 0x001d0802, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x7de80000, 0x8c6318c4, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0xdeb22108,
        0x94bd9d6b, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x2b0a5294, 0x4a5894b1, 0xdef7bd2c, 0x1084ef7b, 0x84210842,
        0x21084210, 0x08421084, 0xde908421, 0x9084277b, 0xbdef7b18, 0xef7bdef7,
        0xb5ad6b5a, 0x19c63294, 0x94a5ad63, 0xa5294a52, 0x8c63a894, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421083, 0x52908421,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x10842108, 0x18c50842, 0x10852123,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0xa5294912, 0x2d745294, 0xc65294a5,
        0x5296a528, 0x2108210a, 0x08421084, 0x256a4211, 0x6318c631, 0x18c6318c,
        0x10a4d763, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x94a52108,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0xde94a529, 0x10842109, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x48421084,
        0x5294a529, 0xf485294a, 0xbdef7bde, 0xef7bdef7, 0x10842108, 0x42110842,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x52908421, 0x94a5294a,
        0x318d4632, 0x9ccbde8e, 0x08421084, 0x42108421, 0x10842108, 0xa5294842,
        0x294a528c, 0x4a3294a5, 0x5294a329, 0xc631ef4a, 0x318c6318, 0xec6318c6,
        0x08421084, 0x42108421, 0x10842108, 0xa4210842, 0xec7bd294, 0x08421084,
        0xde908421, 0x1084ef7b, 0x84210842, 0x21084210, 0x08421084, 0x42109421,
        0xf75ae908, 0xa5ef7bde, 0x294a5294, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x52946421, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a52e8a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x084314a5, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x31885314, 0x4a5294a6, 0x6318c529,
        0x94a4318a, 0x84294a52, 0x21084210, 0x23129484, 0x84210842, 0x10714210,
        0x84210842, 0x21084210, 0x09d318a4, 0x42108421, 0x77a4277a, 0x84210842,
        0x21084210, 0x08421084, 0x4213a421, 0x93a42108, 0x84213bde, 0x31885ef4,
        0x7a5294a6, 0x6377a637, 0xf7bde90a, 0xbd377bde, 0x27484ef7, 0x3bd29484,
        0x84210842, 0xcc844210, 0x4a5294a9, 0xe96249d5, 0x09d314bd, 0xde908421,
        0x77a4277b, 0x84210842, 0x21084210, 0x08421084, 0x4213a421, 0x13a42108,
        0x84e909d2, 0x31ba5ef4, 0x7bde94a6, 0x52f7a52f, 0xf4bdef4a, 0x9def7bde,
        0xe93a4210, 0x3bdef7bd, 0x84210842, 0x10a54210, 0xbdec4a42, 0xef7bdef7,
        0x09d314bd, 0x42108421, 0x74842748, 0x84210842, 0x21084210, 0x08421084,
        0x4213a421, 0x13a42108, 0x842109d2, 0x31885ef4, 0x4a5294a6, 0x6374c52f,
        0xf7a4ef4a, 0xbdef7bde, 0xef7bdef7, 0x3bd29484, 0x84210842, 0xf6714210,
        0x9def7bde, 0x294a5294, 0x09d318bd, 0x42108421, 0x77a4277a, 0x84210842,
        0x21084210, 0x08421084, 0x4213a421, 0x13a42108, 0x842109d2, 0x29885ef4,
        0x7a5294a6, 0x6377a637, 0xf7bdef4a, 0xbd314bde, 0x27484ef7, 0x3bd29484,
        0x84210842, 0x28954210, 0xbd5294a5, 0xef7bdef7, 0x09d217bd, 0xde908421,
        0x13a4213b, 0x9def4842, 0x213a4e90, 0x7a4277bd, 0xde9084ef, 0x1084213b,
        0x84210842, 0x31bbdef4, 0xbbde98c5, 0x631ba631, 0xf7a4ef4a, 0xbd377bde,
        0xef7bdef7, 0x3bdef7bd, 0x84210842, 0xa94a4210, 0x75ad6b5a, 0xef7bded6,
        0x085318c5, 0x42108421, 0x13a4213a, 0x84210842, 0x21084210, 0x08421084,
        0x4213a421, 0x10842108, 0x84210842, 0x29485ef4, 0x7a6318c5, 0x5297a529,
        0xf7bdef4a, 0x84e94bde, 0xef49de90, 0x3bd29484, 0x84210842, 0xf7bd4210,
        0x4a8f7bde, 0xaa94a529, 0x091318a4, 0x42108421, 0x13a4213a, 0x84210842,
        0x21084210, 0x08421084, 0x4213a421, 0x10842108, 0x842109d2, 0x29885ef4,
        0x7a6318c6, 0x531ba631, 0xf7bdef4a, 0xbde98dde, 0xe909def7, 0x3bd29484,
        0x84210842, 0x909d4210, 0xbdef7bde, 0xef7bdef7, 0x084318a5, 0x42108421,
        0x13a4213a, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x31885290, 0xba5294a6, 0x631ba631, 0xf7bda90a, 0x4a31084e,
        0x2294a529, 0x3bd29484, 0x84210842, 0x294a4210, 0xaa5294a5, 0x21084212,
        0x09d318bd, 0x42108421, 0x10842108, 0xbde90842, 0x21084213, 0x08421084,
        0x42108421, 0x74842108, 0x84210842, 0xef49d210, 0x08421084, 0xde97bde9,
        0x94c6377b, 0xc6e97a52, 0x318c6318, 0x3bdef7bd, 0x84210842, 0x1bbd4210,
        0xbdef7b13, 0xef7bdef7, 0x0842109d, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10a42108, 0xa5294a52, 0x9f7bde94,
        0xc8421084, 0x5294a528, 0x2108894a, 0x08421084, 0xef7bd8c5, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x3a4e909d, 0x4e908421,
        0x10842108, 0x84210842, 0x21084210, 0x49d21084, 0x42108427, 0x10a42108,
        0xa5294a52, 0xef485294, 0xfa421084, 0x5294a5e8, 0x2108ef4a, 0x08421084,
        0x21084ef5, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x631ad6a4, 0x18c6318c, 0xc6318c63, 0xa5ad6b1a, 0xad6b5ad4, 0x10842108,
        0xa5290842, 0x294a5294, 0xb52d4b55, 0x319cd734, 0x08421084, 0x42109d21,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x94bdef7a,
        0xa5294a52, 0x314a5294, 0x625294a5, 0x42108429, 0x94a5294a, 0xbd294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0xad7a5294,
        0x6b5ad6b5, 0x5ad6b5a9, 0xc631ad7b, 0x35ad6b18, 0xef7bdec6, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x63108421, 0x94c5294a,
        0xa6294a52, 0x214a6314, 0x10842108, 0x18c50842, 0x10848c63, 0xa5318842,
        0x29484210, 0x08631885, 0x6318c631, 0x94a4210c, 0x84210852, 0x21084210,
        0x4a631484, 0x6318c631, 0x2108310a, 0x08421084, 0xad4a6319, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x40000000, 0xdef7bd07,
        0x8421ef41, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08423884, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x4213a421, 0x1084ef48, 0xa4e90842,
        0xef484213, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x4213a421, 0x1084ef48, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x13a42108, 0x84ef4842, 0xe9084210, 0x484213a4, 0x421084ef,
        0x10842108, 0x84e90842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x13a42108, 0x84ef4842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x294bde90, 0x6318c631,
        0xa529518c, 0x294a5294, 0x4a5294a5, 0xef7aa529, 0x08421084, 0x42108421,
        0xd6b52108, 0xb5ad6b5a, 0xef7bdef6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x21ef4000, 0xef421084,
        0x0842108c, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x1084246a, 0x84210842, 0x21084210, 0x08421096, 0x42108421,
        0x10842108, 0x84210842, 0xef7ae690, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x18908421, 0x10894a63, 0xa4210842, 0xef7bdef7,
        0x08421084, 0x42108421, 0x94842108, 0xbdef4c52, 0x277bdef7, 0x08421084,
        0x42108421, 0x94842108, 0xbdec6262, 0xef7bdef7, 0x08421084, 0x42108421,
        0x94842108, 0xbdef7bd2, 0xef7bdef7, 0x08421084, 0x42108421, 0x97a4213a,
        0xbdef7bd2, 0xef7bdef7, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0xa5298a52, 0x318a5294,
        0x4c6318c6, 0x5294a631, 0x94a5294a, 0x311c6312, 0xef4a49c6, 0x10842108,
        0xdef50842, 0x294aef7b, 0x4a5294a5, 0xef7bdef5, 0x2318c631, 0x52c6318b,
        0x21082e8a, 0x08421084, 0xef7bdef5, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08419084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0xa4210842, 0xef7bdef7,
        0x4a421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0xde90a421, 0x1084ef7b, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0xbdef4842, 0xef7bdef7, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0xe9084210, 0x8c6314a5, 0xd318c529, 0x14c6ef7b, 0xa6318c63, 0xef7bd294,
        0x231ef7b5, 0x84210842, 0x10844210, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x1084ef48, 0xbdef7a42, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0xd2108421, 0x1084ef7b,
        0x84210842, 0x21084210, 0x08421084, 0xdef48421, 0x2108ef7b, 0x08421084,
        0xad7bdea9, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x08421084, 0x42108421, 0x10842108, 0xc5290842, 0x8c7bd298, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0xa5314c42, 0xe94a5294, 0x4a6314c5, 0x5294a529, 0x98c6318c,
        0xa5294a52, 0x2f7a5294, 0x10842108, 0xdef50842, 0x2108ef7b, 0x08421084,
        0xef7bdef5, 0x6318c631, 0x18c6311c, 0x94a5ef63, 0xa5294a52, 0x29ca5294,
        0x4a5294a5, 0x5294a529, 0xf7bde94a, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x086294a5, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0xa5294c52, 0x318c5314, 0x086314c6, 0x42108421, 0x2108ef7a, 0x08421084,
        0x8c6318c5, 0x6b5ad6b1, 0x52d6b5ad, 0x94a5294a, 0xb5ad6b52, 0xec635ad6,
        0x084218a5, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x8a5294c4,
        0x5298a531, 0x2108210a, 0x08421084, 0x21084211, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x48421084, 0x6318a531, 0x18a5298a,
        0xbdef7bd3, 0x8c631ef7, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x8c621084, 0x5318c631, 0x94a5294a, 0xbd294c62, 0x8c6318f7,
        0x10842108, 0xdef50842, 0x21082109, 0x08421084, 0x21084211, 0x08421084,
        0x42108421, 0x10842108, 0x63210842, 0x8c46318c, 0x42108421, 0xdef7a108,
        0x0000ef7b, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x0001de80, 0x6318c631, 0xdef7bd8c, 0x94a5ef7b, 0xa5294a58,
        0x294a5294, 0x4a5294c5, 0x42108529, 0x1084210a, 0xa5310852, 0xef7bde90,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x30842108, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x108c6318, 0x84210842,
        0x23084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x18c63184, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x02008020, 0x00802008,
        0x80200802, 0x20080200, 0x08020080, 0x02008020, 0x00802008, 0x80200802,
        0x20080200, 0x08020080, 0x02008020, 0x00802008, 0x80200802, 0x20080200,
        0x08020080, 0x02008020, 0x00802008, 0x80200802, 0x20080200, 0x08020080,
        0x02008020, 0x00802008, 0x80200802, 0x21084200, 0x08021084, 0x02008020,
        0x00802008, 0x80200802, 0x20080200, 0x08020080, 0x02008020, 0x00802008,
        0x80200802, 0x20080200, 0x08020080, 0x02008020, 0x00802008, 0x80200802,
        0x20080200, 0x08020080, 0x42108421, 0x00000008, 0x84210000, 0x00ef4210,
        0xef400000, 0x42108421, 0x00000008, 0x84210000, 0x00084210, 0x00000000,
        0x42108421, 0x000000ef, 0x8421ef40, 0x1d084210, 0x0741d074, 0x42108421,
        0x00000008, 0x84210000, 0x21084210, 0xef421084, 0x42108421, 0x21084208,
        0x84211084, 0x42084210, 0x10842108, 0x42108421, 0x21084208, 0x84211084,
        0x00087a10, 0xa0682000, 0x7a108694, 0x20000008, 0x8421a528, 0x00087bd0,
        0xa529d000, 0x42108421, 0x00000008, 0x87bda528, 0x00087a10, 0xed282000,
        0xad6b5ad6, 0xad5ad6b5, 0x318cd6b5, 0x0f8c58c6, 0x7b60f7b6, 0x6318c631,
        0xad6b178c, 0xc631b6b5, 0xf18c6318, 0x5c6318c1, 0x9b28c62b, 0x18c6318b,
        0xca318c63, 0x318c62b8, 0xb46318c6, 0xbbad6b5a, 0xad6b5ad6, 0xf46ad6b5,
        0x4a5294ae, 0x1b9b2949, 0x94a5294a, 0x29494a52, 0x8c63eb9b, 0x6318c631,
        0xef7a318c, 0xe739ce73, 0x39ce739c, 0xce739ce7, 0x739ce739, 0x9ce739ce,
        0x7bdef7b3, 0xdef7bdef, 0x94a5ef7b, 0xa5294a52, 0x39ce5294, 0x4a739ca7,
        0x5294a529, 0xf7a5294a, 0xbdef7bde, 0xef7bdef7, 0x6b5a82b5, 0x0006b505,
        0x80000840, 0x12ad4150, 0xad400000, 0x2a0ad6b5, 0x0002a0a8, 0x00000d40,
        0x24210810, 0x00021ad4, 0x41294a52, 0x59542108, 0x294aa86b, 0x4a5294a5,
        0x5294a529, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x52102529, 0xdad5494a, 0x4a52ef7b, 0xb5ad6b29, 0xad6b594a, 0xab5956b2,
        0x5ad6b5ac, 0xd6b5acab, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xcab594ab, 0xb5ad6b2a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0x5294a52a, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0x6b5ad6b5, 0x5735cdad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad652, 0x5ab9b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b2ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0x94a52956, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0xb5ad6b59, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0x94a52ad6, 0x6b5ad652, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0xdef7bded, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x6b5ad6b5, 0xded6b5ad, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0xad6b5529, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0xa52ab5ad, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5956b5a, 0xad6b5ad6,
        0x6b5ad655, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0x52ad6b5a, 0x94a5294a, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5956b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0xd735cdad, 0x35cd735c,
        0x4a529cd7, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0xb5ad6b55,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x9b294a52, 0x294a5293, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0x65294a52,
        0xd735cd73, 0x4a52735c, 0x5294a529, 0x94a5294a, 0x9ae6ca52, 0xe6b9ae6b,
        0xb9ae6b9a, 0x4e6b9ae6, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0xcd94a529,
        0x94a52735, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x949cd94a,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0x4a52ad6b, 0x5294a529, 0x94a5294a, 0x6b294a52, 0x294a5295,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad7bda, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5af6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210000,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42000020, 0x10040100, 0x80200000, 0x21084010, 0x00063084,
        0x02008020, 0x00802008, 0x80200802, 0x20080200, 0x08020080, 0x02008020,
        0x00802008, 0x80200802, 0x20080200, 0x08020080, 0x02008020, 0x00802008,
        0x80200802, 0x20080200, 0x08020080, 0x6a108020, 0x1056b5ad, 0x80a52840,
        0x3def7bd0, 0x8c5518c6, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0xdef7bd0f, 0x1084ef43, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0xdef7bd21, 0xf7b11f7b, 0xbdef7bde, 0x2f7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0xbde90842, 0xef7bdef7, 0x08421084, 0x421084e9, 0x1084e908,
        0x84e90842, 0xe9084210, 0x08421084, 0x421084e9, 0x1084e908, 0x84e90842,
        0xe9084210, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x60f83e31, 0xf8c1f18c, 0xc6318c60, 0x31646318, 0x8c60f8b2, 0x5cd7360f,
        0x18c5cd73, 0xc6311c63, 0x318c6318, 0x8c631632, 0x6318b62c, 0x18c6318c,
        0xc6b58c63, 0xae6b9b18, 0xef58e6b9, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5af6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xbdef7bda, 0xef7bdef7, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xbdef6b5a,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xd6b5ef7b, 0xb5ad6b5a, 0xef7bdad6,
        0x0758c636, 0xd735cd49, 0xd5cd735c, 0xcd735cda, 0x739ac735, 0x5294a535,
        0x5295294a, 0x8c6c318a, 0x29ad4631, 0xad6241a5, 0x0842109d, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0xbde90842,
        0x20c74a14, 0x0842108c, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x20c63890, 0x09def7bd, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x109d2108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x2ab5e908, 0xb5ad54a5, 0xad6b5ad6, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x7bdad6b5, 0xdef7bdef, 0x1084ef7b,
        0x84210842, 0x21084210, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xed6b5ad6, 0x94a5294a, 0x5ad54a52, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0xa5294aad, 0x29555294, 0x4a5294a5, 0x5294a529, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x94a5294a, 0x5ad54a52,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0x2955ad6b,
        0x4a5294a5, 0x5294a529, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x08421084, 0x42108421, 0x10842108, 0x84210642,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0xd6b5ef7a, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0xdef7bded, 0x1084ef7b, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x63210842, 0x8c46318c,
        0x08421084, 0x32108421, 0x10848c62, 0x84210842, 0x21084210, 0x10842108,
        0xd2110842, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x02008020, 0x00802008,
        0x80200802, 0x20080200, 0x08020080, 0x02008020, 0x00802008, 0x9ce72902,
        0xa5294a58, 0x1c4a5294, 0x02008020, 0x00802008, 0x80200802, 0x20080200,
        0x29463080, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x48421084,
        0x94a5294a, 0xc4a54a52, 0xbd8c6318, 0xef7bdef7, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x631d294a, 0x18c6318c, 0x02008294, 0x00802008, 0x80210802,
        0x20080200, 0x08020080, 0x02008020, 0x00802008, 0x80200802, 0x20080200,
        0x08020080, 0x02008020, 0x00802008, 0x84230802, 0x01084210, 0x08001004,
        0x02008020, 0x10528308, 0x80202040, 0x20080210, 0x08020080, 0x02008020,
        0x00002008, 0x00000800, 0x20080200, 0x08020080, 0x00008020, 0xde840100,
        0xf420ef7b, 0x200803d0, 0xef7bdef4, 0x7bdef7bd, 0xdef7bdef, 0x8fbdef7b,
        0x63204031, 0x21084204, 0x48421484, 0x42908421, 0x10842108, 0x84210842,
        0x21084210, 0x4a631084, 0x5ad6b531, 0x294aef7a, 0xb3ad54a5, 0xef7bdef6,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0xbd8c6312, 0xef7bdef7, 0x084210c6, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0xc6318c62, 0x318c6318, 0x4a5318c6, 0xdef7bdef, 0x21088c7b, 0x08421084,
        0xef7bdef5, 0x4a5294a5, 0x5294a529, 0x10a5294a, 0x31210842, 0x29091246,
        0x10842108, 0x42110842, 0x10842108, 0x84210842, 0x21084210, 0x48421084,
        0x5294a529, 0x10848c4a, 0x84210842, 0x21084210, 0x08421084, 0x5294a529,
        0x18a5294a, 0xbdef7bd3, 0x8f7bdef7, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0xef7a4210, 0x084314a5, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x90842108, 0xa5294c62, 0x318a5318,
        0x6318c626, 0x18c6318c, 0x21081f63, 0x08421084, 0x8c7bdef5, 0xca421084,
        0x42108420, 0x21082108, 0x08421084, 0xe9084211, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x5294a421, 0x14a6314a,
        0xbde94a63, 0xef7bdef7, 0x08429084, 0x52108421, 0x2108ef4c, 0x08421084,
        0x8c631ef5, 0x08421084, 0x42108421, 0x10832108, 0xb5a90842, 0x210c5312,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x94852108, 0x85290852, 0x29484210, 0x7bde90a4, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0x8c464277, 0x08421084, 0x53108421, 0x9231318a,
        0xbde94c31, 0xef7bdef7, 0x0842109d, 0x42109de9, 0x109de908, 0xbde90842,
        0xef7bdef7, 0x08421084, 0x421084e9, 0x8421e908, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x18c63a04, 0x42108421,
        0xda506108, 0x8421ef7b, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x8a631084, 0x6898c531, 0x2108ef4a, 0x08421084, 0xef7bdef5,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x7bd21084,
        0xdef7bdef, 0x1084ef7b, 0x84210842, 0x21084210, 0x08421084, 0x4277bde9,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0xef7bd210, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0x39ce739c, 0xce739ce7,
        0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c, 0xce739ce7, 0x739ce739,
        0x9ce739ce, 0xe739ce73, 0x39ce739c, 0xce739ce7, 0x739ce739, 0x9ce739ce,
        0xe739ce73, 0x39ce739c, 0xce739ce7, 0x739ce739, 0x9ce739ce, 0xe739ce73,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x1084ef48,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0xef7bdef4, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x42108421, 0xdef7bde8,
        0xf7bdef7b, 0xbd084210, 0x2149def7, 0x08421084, 0x42124421, 0x10842108,
        0x84e90842, 0xe93a4210, 0x3a427484, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x50842108, 0x94a5294a, 0xa5294a52, 0x7bded294, 0xdef7bdef,
        0x77bdef7b, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x6b884210,
        0x6b5ad6b5, 0x5ad6b5ad, 0x1084ad6b, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x13bd2108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0xdef7bd21, 0xf7bdaf7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0x1084ef7b, 0x84210842, 0xad6b3210,
        0x4a5294a5, 0x5294a529, 0xc631294a, 0x2e6c6318, 0xef7bdef6, 0x4a5294a5,
        0x5294a529, 0xb191294a, 0xae6b9ab5, 0x6b9ae6b9, 0x62e6b9ae, 0x18c62e6c,
        0xc6315ad7, 0xac8c631e, 0x8b9ae6b9, 0xa5264a31, 0xd8c671ec, 0x1084ef7b,
        0x84213a42, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0xd77a4210, 0x6338c63d, 0x1945cd8c,
        0x21088c59, 0x08421084, 0x8ca528c5, 0x00000011, 0x00000000, 0x00000000,
        0x00000000, 0x5d1d1680, 0x42108434, 0x10842108, 0x84210842, 0x21084210,
        0x6c9d2684, 0x2317362e, 0x42108421, 0x10832108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x18c84210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0xe9084210, 0x084213bd, 0x4213bd21,
        0x13bd2108, 0xbd210842, 0xef7a4213, 0xe75a4a73, 0x294a55ec, 0xf7bded6b,
        0x5def7bde, 0xef6b5d6b, 0x08421084, 0xd2108421, 0x10842109, 0x84210842,
        0x21084210, 0x08421084, 0x421084e9, 0x10842108, 0x84210842, 0x27484e90,
        0x08421084, 0x42108421, 0x1084ef48, 0x84210842, 0xef484210, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0xef7bde90,
        0x7bdec631, 0xa5294a57, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0xb5af7bd5, 0xad6b5ad6, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0xaa529494, 0xad6b5ad6, 0x6b5ad6b5, 0x552ab5ad, 0xd6b5ed6b, 0xb5ad6b5a,
        0xef7b5ad6, 0x7bdef7b5, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xd6b5ef7b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xef4b5ad6, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0xef7a4210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0xf7a42108, 0xbdef7bde,
        0xef7bdef7, 0x94a52945, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0xef7bd529,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x7bd5294a,
        0xdef7bdef, 0x10842109, 0x84210842, 0x21084210, 0x08421124, 0xdea48421,
        0x1084ef7b, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0xa5294842, 0xef7bde94, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x8f484210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x7bd21084, 0x421084ef, 0xa5312108, 0xbdef5294, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10842100, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x10840842, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0xef484210, 0x10842108,
        0xdef50842, 0x0000ef7b, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x21ef7bd0, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0xef7bd084, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0xdef7bd21, 0x1084ef7b, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x7bd21084,
        0xdef7bdef, 0x00008f7b, 0x00000000, 0x00000e80, 0x00000000, 0x0e800000,
        0x80000000, 0x210f400e, 0x08421084, 0x4210f421, 0x10842108, 0xf4210842,
        0x21084210, 0xef7a10f4, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0xbde90842, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0xbdef4842, 0xef7bdef7, 0x08421084, 0xdef7bd21, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x46318c63, 0x318c631f, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0xc6318c63, 0x318c6318, 0x8fa318c6, 0x6318c631, 0xef7bde8c,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x48421084, 0x4213a4ef,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0xa4274842, 0x277a4ef7, 0x08421084, 0x42108421, 0x10842108, 0x4a8f4842,
        0x5294a529, 0x08421084, 0x42108421, 0x10842108, 0x55a90842, 0x5294a529,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0xe9084210, 0x7bdef7bd,
        0xa5294a57, 0xf7bd5294, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421, 0x90842108,
        0xbdef484e, 0x5294a577, 0x08421084, 0x42108421, 0x10842108, 0x4a528842,
        0x8f7bd529, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x8f7bdef4,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0xbd210842, 0x2114aef7, 0x94a5294a, 0xa5294a52, 0x2bbd5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x4bd294a4, 0x5ef7bde9, 0x1084294a, 0x9d2109d2, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0xa5ef4842, 0x2f7bde94, 0x94a5294a, 0xdef7aa52,
        0xc631ef7b, 0xb18c6318, 0xef7bdef7, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x8a944210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x52944210, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42109521, 0x10842108, 0x84210842, 0x21084210, 0x4a421084,
        0xa577bde9, 0xc6315294, 0xbdec6318, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x3def4842, 0x8c6318c6, 0x08421084, 0x42108421, 0x10842108, 0x4aef4842,
        0x5294a529, 0x08421084, 0x42108421, 0x90842108, 0x4aef7bde, 0x5294a529,
        0x08421084, 0x42108421, 0xf4842108, 0x3def7bde, 0xef7b18c6, 0x7bdef7bd,
        0xa5295def, 0xf7bd5294, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0xdef7a421, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,
        0xbdef7bde, 0xef7bdef7, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0xbdef7bde, 0x5294a52b,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x4a521084,
        0xdef7bd29, 0x2108ef7b, 0x08421084, 0xef7bdef5, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0xea94a529, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x52f48421, 0xf484ef58,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x52944210, 0x94a5294a,
        0xdef7bd22, 0x1084ef7b, 0x84210842, 0x21084210, 0x48421084, 0x5294a529,
        0x2945294a, 0x318c62a5, 0xef7bdef6, 0x7bdef7bd, 0xdef7bdef, 0x1084ef7b,
        0x84210842, 0x21084210, 0x4a529484, 0xdef6318c, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0x1084ef7b, 0x84210842, 0x21084210,
        0x94421084, 0xd5294a52, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084,
        0x42108421, 0x10842108, 0xbde90842, 0xef7bdef7, 0x084218a6, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0xa5210842, 0x294a5294, 0x4a5294a5, 0x18c63189, 0x2bbdef63, 0x4a5294a5,
        0x5294a529, 0x14a5294a, 0x84210842, 0x90854210, 0xbdef4852, 0x2f7bdef7,
        0x084218a5, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x98c62108, 0xa6314a52, 0x8c751894, 0x7bde9631, 0xdef7bdef,
        0x1084ef75, 0x84210842, 0x21084210, 0x08421084, 0xdef7a421, 0x2108ef7b,
        0x08421084, 0xef7bdef5, 0x084214a5, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x6294a529, 0x94a5294a, 0x08423a52, 0x42108421,
        0x8c48c631, 0xdef7bd21, 0x1084ef7b, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x90842108, 0xbde92312, 0xef7bdef7, 0x084218a5, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0xa5294c63, 0x314a5294, 0x62421086, 0x5294b18c, 0x210829a2, 0x08421084,
        0x8c624891, 0x94a5295d, 0xa5294a52, 0x294a5294, 0xbdef7aa5, 0xef7bdef7,
        0x08421084, 0x42108421, 0x74842108, 0x84210842, 0x21084210, 0x08421084,
        0x62108421, 0x18a5298c, 0x31294c53, 0xe96318c6, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x08421084, 0x4213a4e9, 0x10842748, 0x84210842,
        0x27484210, 0x08421084, 0xdef62421, 0x1084ef7b, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x29084210, 0x4a5298c6,
        0xde94a529, 0x2108ef7b, 0x08421084, 0xef7bdef5, 0x09d318a5, 0x42108421,
        0x77a4277a, 0x84210842, 0x21084210, 0x08421084, 0x4213a421, 0x13a42108,
        0x842109d2, 0x318852f4, 0x7a6318c5, 0x6377a637, 0xf7a4ef4c, 0xbd377bde,
        0x2109def7, 0x7bd31884, 0x5294a529, 0x94a5ef7a, 0xbdef7a52, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0xa5318c42, 0x294a5294, 0x4c5294c6, 0x18908421,
        0x21088c63, 0x08421084, 0x2163d8c5, 0x7bdef484, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x98c62108, 0xc5294a52, 0x298c6314,
        0x484294c5, 0xdef7bd24, 0x2108ef7b, 0x08421084, 0xef7bdef5, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x94c63108,
        0xc6ef4a52, 0x298a5318, 0x6318c625, 0x18c6318c, 0xc6318c63, 0x848c6318,
        0xef4a5210, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x98c62108, 0xa5294a52, 0x298a6314, 0x7a48c625, 0xdef7bdef,
        0x2108ef7b, 0x08421084, 0xef7bdef5, 0x6318c631, 0x18c6318c, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x62908421, 0x94a5318a, 0x24298a52, 0xef7bdef6,
        0x10842108, 0xdef50842, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x294bde90, 0x8a5294c6, 0xd294a529, 0x2108ef7b,
        0x08421084, 0xac631529, 0x08421084, 0xdef7bde9, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x62108421, 0x94a5298c, 0xa6294a52, 0xef7bd894, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x10842108,
        0xa5290842, 0xa94a5294, 0xbdef7bde, 0x277bdef7, 0x08421084, 0x4ef49de9,
        0x10842108, 0x84e909d2, 0x21084210, 0x08421084, 0x42108421, 0x18c62108,
        0xa6374c63, 0x214c52f7, 0x63129886, 0xdef7bdec, 0x2108ef7b, 0x08421084,
        0xef7bdef5, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084,
        0x4213bd21, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x18c42108, 0xbd294a53, 0x318c6297, 0x7a624485, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x4a5294a4, 0x4214a529, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x90842108, 0xc5294a52, 0x894a5290,
        0x6318c631, 0xdef7bd2c, 0x94a4ef7b, 0xa6314a52, 0x21084294, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x52948421,
        0x94a5294a, 0xa5314a52, 0x8c4918c4, 0x7bdec631, 0xdef7bdef, 0x1084ef7b,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0xa4210842, 0xef7bdef7,
        0x08421084, 0x4213a421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x94a53108, 0xa5e94a52, 0x298a5294, 0x6318c624, 0xdef7bdef,
        0x2108ef7b, 0x08421084, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x1231ef7a,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x97bd2108, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294dd29, 0x94c5294a, 0xbde94a62, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x427484e9,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x94a42108,
        0xbde94a52, 0x2f4a5e97, 0x0a5294a5, 0xdef7bd29, 0x2108ef7b, 0x08421084,
        0xef7bdef5, 0x48421084, 0x4213a427, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x63188421, 0x74a5e98c, 0xa4298a63, 0xef7bdef7, 0x10842108,
        0xdef50842, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084,
        0x42108421, 0x90842108, 0xb1898c52, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7a4ef7b,
        0xbdef7bde, 0xef7bdef7, 0x94a5294a, 0xa5294a52, 0x294a5294, 0xb5ad6aa5,
        0x9ce75ad6, 0x6b5ad6b3, 0x5ad6b5ad, 0xf6b5ad6b, 0xbdef7bde, 0x8f7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0xef7bdef4, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xc631ea52, 0xbdef7b18, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x7bd21084, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0x1084ef7b, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0xc6242108,
        0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x6b5ae908, 0xbad6b5ad, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0xdef7bde9, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0xa4210842, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0xe9084210, 0x10842108, 0xdef50842, 0x10848c7b,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0xe9084210,
        0x10842108, 0xdef50842, 0x1084ef7b, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x94a5ef48, 0xbdef6252, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x94a52108,
        0x31894a52, 0xad6b58c6, 0x6b118c63, 0xdef7bdef, 0x2108ef7b, 0x08421084,
        0x5294a575, 0x0842754a, 0x42108421, 0x10842108, 0xbd210842, 0x2109def7,
        0x08421084, 0x42108421, 0xf7bd2108, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x318a94a5, 0xef7bdec6, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0xde908421,
        0x18c42f7b, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0xdef7bd31, 0x94a52f7b, 0x6318c631,
        0x18c6318c, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7a51c463,
        0xdef7bdef, 0xf4c6ef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0xbd210842, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0xbdef4842, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x08421084, 0xdef7a421, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0x8c63ef7b, 0x6318c7d1, 0xe8c7d18c,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x7bde9084,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0x9084ef7b, 0xbdef7bde, 0xef7bdef7, 0x084ef7bd, 0xdef7bd21, 0x1084ef7b,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0xef7bd210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0xde908421, 0x1084ef7b, 0x84210842, 0xef7a4210,
        0x08421084, 0xdef7a421, 0x1084ef7b, 0x84210842, 0x894b5ef4, 0x7bdd6b5a,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5ef4a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0xdef7bde9, 0xd6b5ef7b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x7bdad6b5, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xbdef6b5a, 0xef7bdef7, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6bded, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x8d5ad6b5,
        0x5ad4a529, 0x18c6318d, 0x5ad6b5ad, 0x294a52eb, 0x4b5a94a5, 0x5294a529,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5296b5ad, 0xd6b5ad4a,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0xded6b5ad, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6a5296b5, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0xbdef7bd5, 0xef7bdef7, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xbded6b5a,
        0xef7bdef7, 0x94a5294a, 0xa5294a52, 0x294a5294, 0xaa5294a5, 0xef7bdef7,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210840, 0x21087a10, 0x08421084, 0x42108421, 0x00000008, 0x00000000,
        0x00000000, 0x00000000, 0x42108400, 0x10842108, 0x84210842, 0x21084210,
        0x003a0084, 0x01de83bd, 0x00001de8, 0x0000003a, 0x21084000, 0x0843d0f4,
        0x43d08421, 0x10842108, 0x00000842, 0x00000000, 0x00000000, 0x00000000,
        0x10840000, 0x84210842, 0x21084210, 0x08421084, 0x40008421, 0xde800007,
        0x00000001, 0x00003a00, 0x087a0000, 0x42108421, 0x10842108, 0x84210842,
        0x00084210, 0xe8000074, 0x3a000000, 0x0003bde8, 0x87a00000, 0x21084210,
        0x08421084, 0x42108421, 0x00842108, 0x00000000, 0x00000000, 0x00000000,
        0x40000000, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210840,
        0x21084210, 0x08421084, 0x42108421, 0x00000008, 0x00000000, 0x00000000,
        0x00000000, 0x42108400, 0x10842108, 0x84210842, 0x21084210, 0x00000084,
        0x00000000, 0x00000000, 0x00000000, 0x21084000, 0x08421084, 0x42108421,
        0x10842108, 0x00000842, 0x00000000, 0x00000000, 0x00000000, 0x10840000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x000000ef, 0x00000000,
        0x00000000, 0x00000000, 0x42108640, 0x10842108, 0x84210842, 0x21084210,
        0x08421904, 0x00000021, 0x00000000, 0x00000000, 0x00000000, 0x08421900,
        0x42108421, 0x10842108, 0x84210842, 0x21086410, 0x00000084, 0x00000000,
        0x00000000, 0x00000000, 0x21086400, 0x08421084, 0x42108421, 0x10842108,
        0x84219042, 0x00000210, 0x00000000, 0x00000000, 0x00000000, 0x84219000,
        0x21084210, 0x08421084, 0x42108421, 0x10864108, 0x00000842, 0x00000000,
        0x00000000, 0x00000000, 0x10864000, 0x84210842, 0x21084210, 0x08421084,
        0x42190421, 0xd0802108, 0x2108423b, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xb5a94a52, 0x294a52d6, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0xd6b5ad6a, 0xb5ad4b5a, 0xad6b5ad6,
        0x6a5ad6b5, 0xd8c6318d, 0xf7bdef7b, 0xbdef7bde, 0x294a52f7, 0x4a5294bd,
        0x5294a529, 0xf7bd294a, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x42108421, 0x10902108, 0x84210842, 0x21084210,
        0xe8421084, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x4a5294a5, 0x5294a5e9,
        0x94a5294a, 0xa5294a52, 0x294a52f7, 0x7a52f4a5, 0xde94a529, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x94a5ef7a, 0x63194a52, 0xef46318c, 0x10842108, 0xdef50842,
        0xf7bda93b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0x1084ef7b, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0xf7bde948, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x52108421, 0x2108294a, 0x08421084, 0x9f7bdef5, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x08421084, 0xd21084e9, 0x1084e909, 0x84210842, 0xe9084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x7a421084, 0xa5294a57,
        0x94a55294, 0xbde94a52, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x42108400, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x4a508421, 0xd194a529, 0x2108ef7b, 0x08421084, 0x8c7bdef5, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0x295def7b, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0x55294a52, 0x29535295, 0xbdef7aa5, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x94a5295d, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5554, 0x4a5294a5, 0xef54a529,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x09d21084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x7a4e909d, 0x42109d27, 0x90842108,
        0x9d21084e, 0xef7bd274, 0x7bde93bd, 0xd2749d27, 0x909d2109, 0x9d277a4e,
        0x2749d274, 0x7a4e909d, 0x4e908427, 0x90842108, 0x9d21084e, 0xe93a4210,
        0x08421084, 0x42748421, 0x10842108, 0x84210842, 0xef7bd210, 0x09d2109d,
        0x42748421, 0x10842108, 0x84210842, 0xef7bd210, 0x7bdef7bd, 0xdef7bdef,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf652ef7b,
        0xbdef7bde, 0xef7bdef7, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0xdad6b5ad, 0xd6b5ef7b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xbdef7bda, 0xef7bdef7, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6bded6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6bd, 0x5ad6b5ad, 0xd6bdad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xbdef6b5a, 0xef7bdef7,
        0x94a5294a, 0xa5294a52, 0xd6b5ad6a, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xf7bdef6b, 0xbdef7bde, 0xef7bdef7,
        0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x7bded6b5, 0xdef7bdef,
        0xd6b5ef7b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xef7bdad6, 0x6b5ad6b5, 0xdef7b5ad, 0xf6b5ef7b, 0xbdef7bde,
        0xef7bdef7, 0x6b5ad6b5, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xa5294a56, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xbdad6b5a, 0xad6bdef7, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ef7b, 0xb5ad6b5a, 0xef7b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xbdef7bda, 0xef7bdef7,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xef7bdef7, 0x6b5ad6b5, 0xdad6b5ad, 0xf7b5ef7b,
        0xbdef7bde, 0xef7bdef7, 0x6b5ad6b5, 0xdad6b5ad, 0xd6b5ef7b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0xdef7bdad, 0xd6b5ef7b, 0xb5ad6b5a, 0xef7bdef6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0xdef7bdad,
        0xd6b5ef7b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xf6b5ef6b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xbdef7bda, 0xef7bdef7, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ef6b,
        0xb5ef7b5a, 0xef7b5ad6, 0x6b5ad6b5, 0xdef7bded, 0xd6b5ef7b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ef7b, 0xb5ad6b5a, 0xef7bded6,
        0x6b5ad6b5, 0xdef7bdef, 0xd6b5ef7b, 0xb5ad6b5a, 0xef7bdef6, 0x6b5ad6b5,
        0xdef7bdad, 0xd6b5ef7b, 0xbded6b5a, 0xef7bdef7, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5e, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0xded6b5ad, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0x2108ef7b, 0x08421084, 0xef7bdef5,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0xa4210842, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0xef484210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x7bdef484,
        0xdef7bdef, 0x1084ef7b, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x7bdef7a4,
        0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0xef484210, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde, 0xef7bdef7,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0xde908421,
        0xf7bdef7b, 0xbdef7bde, 0xef7bdef7, 0x7bdef7bd, 0xdef7bdef, 0xf7bdef7b,
        0xbdef7bde, 0xef7bdef7, 0x7bdef75d, 0xdef7bdef, 0xf7bdef7b, 0xbdef7bde,
        0xef7bdef7, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0xf7bd294a,
        0xbdef7bde, 0xef7bdef7, 0x39ce739c, 0xce739ce7, 0x739ce739, 0x9ce739ce,
        0xe739ce73, 0x39ce739c, 0xce739ce7, 0x739ce739, 0x9ce739ce, 0xe739ce73,
        0x39ce739c, 0xce739ce7, 0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c,
        0xce739ce7, 0x739ce739, 0x9ce739ce, 0xef79ce73, 0x00000000,
    ],
    bits: 5,
    default: 29,
};

pub(crate) static BIDI_CLASS: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0003, 0x0002, 0x0002,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0x0002, 0x0003, 0x0004, 0xffff, 0x0005, 0xffff, 0x0006,
        0x0007, 0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012,
        0x0013, 0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0xffff, 0xffff,
        0xffff, 0xffff, 0x001d, 0x001e, 0x001f, 0xffff, 0xffff, 0xffff, 0xffff, 0x0020, 0x0021, 0x0022,
        0x0023, 0x0024, 0x0025, 0x0026, 0x0027, 0x0028, 0x0029, 0x002a, 0x002b, 0x002c, 0xffff, 0x002d,
        0xffff, 0xffff, 0xffff, 0x002e, 0x002f, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036,
        0x0037, 0x0038, 0x0034, 0x0034, 0x0034, 0x0039, 0x0034, 0x0034, 0xffff, 0xffff, 0x0034, 0x0034,
        0x0034, 0x0034, 0x003a, 0x003b, 0xffff, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x0034, 0x0041,
        0x0042, 0x0043, 0xffff, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0049,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x004a, 0xffff, 0xffff, 0x004b, 0x004c, 0x004d, 0x004e,
        0x004f, 0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0057, 0x0058,
        0x0058, 0x0058, 0x0059, 0x005a, 0x005b, 0x005c, 0x005d, 0x005e, 0xffff, 0xffff, 0x005f, 0x0060,
        0xffff, 0x0061, 0x0062, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0063, 0x0063, 0x0064, 0x0063, 0x0065, 0x0066, 0x0067, 0x0063, 0x0063, 0x0063, 0x0068, 0x0063,
        0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0x006e, 0x006f, 0x0070, 0x0071, 0x0072, 0x0073, 0xffff,
        0x0074, 0x0075, 0xffff, 0x0076, 0x0077, 0x0078, 0x0079, 0xffff, 0x007a, 0xffff, 0x007b, 0x007c,
        0x007d, 0x007e, 0xffff, 0xffff, 0x007f, 0x0080, 0x0081, 0x0082, 0xffff, 0x0083, 0xffff, 0x0084,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0085, 0x0086, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0087, 0x0088, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0x0089, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x008a, 0xffff, 0xffff, 0xffff, 0x008b, 0x008c, 0x008d, 0xffff, 0x008e, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x008f, 0x0090, 0x0091, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0092, 0x0093, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0094, 0xffff, 0x0086, 0xffff, 0xffff, 0x0095, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0063, 0x0096, 0x0097, 0x0063, 0x0063, 0x0063, 0x0063, 0x0063,
        0x0098, 0x0099, 0x009a, 0x0063, 0x0058, 0x009b, 0x0063, 0x0063, 0x009c, 0x009d, 0x009e, 0x009f,
        0x00a0, 0xffff, 0x0034, 0x0034, 0x0034, 0x0034, 0x0034, 0x0034, 0x0034, 0x00a1, 0x00a2, 0x00a3,
        0x00a4, 0x00a5, 0x0034, 0x0034, 0x00a6, 0x00a7, 0x0034, 0x00a8, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00a9, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00a9,
        0x00aa, 0x00aa, 0x00ab, 0x00ac, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa,
        0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa,
        0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00aa, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00a9,
    ],
    level3: &[
        0x9ce739ce, 0x183e0e73, 0x39ce739f, 0xce739ce7, 0x83def739, 0x94a54a51,
        0xc4ca5294, 0x21086312, 0x08421084, 0x94a52931, 0x00000012, 0x00000000,
        0x00000000, 0x00000000, 0x94a52900, 0x00000012, 0x00000000, 0x00000000,
        0x00000000, 0x74a52900, 0x9ee739ce, 0xe739ce73, 0x39ce739c, 0xce739ce7,
        0x739ce739, 0x94a52a4c, 0x29025294, 0x214a949d, 0x12948124, 0x94a52901,
        0x00000000, 0x00000000, 0x00000000, 0x00900000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00900000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x40000000, 0x0000004a, 0xa5294800, 0x294a5294, 0x480094a5, 0x5294a529,
        0x94a5294a, 0xa4000000, 0x294a5294, 0x4a529025, 0x5294a529, 0x94a5294a,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0x00006b5a,
        0x00002520, 0x04800000, 0x25200000, 0x00000090, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00048000, 0x00000000, 0x5ad68000, 0x0001ad6b,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00480000, 0xb5a354a4, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x68dad6b5, 0xdad1b5a3, 0x318c6368,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6,
        0x6318c631, 0x18c6318c, 0x96b5ad6b, 0xc2294494, 0xb5ad9488, 0xad6b5ad6,
        0x21084235, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0xd6908421, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0xd6b5ad6b,
        0xb5a96b5a, 0x108d2108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0xad6b4842,
        0x6c96d6b5, 0x08d6b5ad, 0xd6b64d69, 0x2108211a, 0x08421084, 0x21084211,
        0x08421084, 0x42108421, 0x11a42108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0xb5ad2108, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0x4235ad6b,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x48421084, 0xd6b5ad6b, 0x108d6b5a, 0x84210842, 0x21084210,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0xd68c6318, 0xb5ad6b5a, 0x52948636, 0x18da318e, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0xad6b4631, 0x6b5ad68d, 0x5a36b5ad, 0xd6b5a36b, 0x8c6318da,
        0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0xa318c631,
        0x18c636b5, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x116b2108, 0xad210842, 0x6b5ad6b5, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0xd6b48421,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6adad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x000035ad, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000d034,
        0x5ad6b5a0, 0x00000d6b, 0xb5a0001a, 0x006b5ad6, 0x00000000, 0x0006b400,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x000001a0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x0000d000, 0x00d6b5a0, 0x00000000, 0x0000001a, 0x00000000,
        0x00000000, 0x0006b400, 0x00000000, 0x28000000, 0x00000005, 0x03400500,
        0x000035a0, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0000d000, 0x000035a0, 0xd6800d68,
        0x01a0001a, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x01ad0000,
        0x00001a00, 0x00000000, 0x000035a0, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000d000,
        0x1ad6b5a0, 0x00000d68, 0x0000001a, 0x00000000, 0x00000000, 0x0006b400,
        0x00000000, 0x01400000, 0x00000000, 0x6b5ad6b4, 0x000001a0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x6800d000, 0x00d6b5a0, 0x00000000, 0x0000001a, 0x00035a00,
        0x00000000, 0x0006b400, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00003400, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000000d, 0x00000000,
        0x0000001a, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x5294a529, 0x00000049, 0x00d0000d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x6b40d000,
        0x4000000d, 0xd6b40d6b, 0x0000001a, 0x00035a00, 0x00000000, 0x0006b400,
        0x00000000, 0x00000000, 0x52000000, 0x04a5294a, 0x000001a0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x0000d000, 0x00000000, 0xd0000000, 0x0000001a, 0x00000000,
        0x00000000, 0x0006b400, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x000001ad, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0000d680, 0x00d6b5a0, 0x00000000,
        0x0000001a, 0x00000000, 0x00000000, 0x0006b400, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x000001a0, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00340000, 0xb4000000, 0x000340d6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x01a00000,
        0xad6b5ad0, 0x50000035, 0x00000000, 0xd6b5ad68, 0x0000035a, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x01a00000, 0xad6b5ad0, 0x0000d6b5, 0x00000000, 0xd6b5ad00,
        0x0000001a, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xad000000,
        0x00000001, 0x00000000, 0x00000000, 0x00000000, 0xa0681a00, 0x00252949,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xb5a00000, 0xad6b5ad6, 0x035ad6b5, 0x40d6b5ad, 0x0000006b,
        0xb5ad6b5a, 0xa06b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x0000d6b5, 0x40000000, 0x00000003, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xb40d6b5a, 0xa06b5ad6, 0x035a0035, 0x00000000, 0x00000000,
        0x00000000, 0xad000000, 0x6b400001, 0x0000000d, 0x00000000, 0xb5a00000,
        0x000000d6, 0x00000000, 0x5a003400, 0x00000003, 0x0000001a, 0x00000000,
        0x001a0000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x6b5a0000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x4a520000, 0x5294a529, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000012, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000011, 0x00000000,
        0x00000000, 0x00000000, 0x00012900, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xb4000000, 0x000000d6, 0x00000000, 0x00000000,
        0x00000000, 0xb4000000, 0x00000006, 0x00000000, 0x00000000, 0x00000000,
        0xb4000000, 0x00000006, 0x00000000, 0x00000000, 0x00000000, 0xb4000000,
        0x00000006, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xad681ad0, 0x001ad6b5,
        0x40000000, 0xd6b5a003, 0xb5ad6b5a, 0x00000006, 0x001a0500, 0x00000000,
        0x00000000, 0x4a520000, 0x5294a529, 0x00000002, 0xa5294a52, 0xd6ca5294,
        0x00006b9a, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x5a000000, 0x00000003, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0001a000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x000035ad, 0x00000d68, 0x34000000, 0xa0000000, 0x000006b5,
        0x25200012, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x94800000, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0x00000000, 0x00000000, 0x00000000, 0x0d680000, 0x00000680, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xad034000, 0x035ad6b5, 0x5a00340d, 0xd6b5ad6b, 0x80000000,
        0xad6b5ad6, 0x6800d6b5, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xb5ad0000, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0x0000035a, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0006b5ad, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xad6b40d0, 0x0000d035, 0x00003400, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xd6800000, 0xb5ad6b5a, 0x00000006, 0x00000000,
        0x000001ad, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x1ad6b400,
        0xd681ad00, 0x0000001a, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x40000000, 0x0001ad03, 0x01ad681a,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xd0000000, 0xb5ad6b5a, 0x006b4006, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x35ad0000, 0xad6b5ad0,
        0x6b5ad6b5, 0x5ad6b40d, 0x00000d6b, 0x0000001a, 0xad0000d0, 0x00000001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x90240000,
        0x00000252, 0x00000000, 0x000094a4, 0x00000000, 0x94a40000, 0x00000000,
        0x00000000, 0x000094a4, 0x00000000, 0x04a40000, 0x6318c631, 0xe746318c,
        0x4a52181c, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x7285f194, 0x294a6184,
        0x5294a4a5, 0x94a5294a, 0xa4c94a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x8ca5294a, 0xdce739ce, 0xe73ad5a4, 0x0008739c, 0x08421080, 0x04a524a5,
        0x10842108, 0x24a50842, 0x000004a5, 0x00000000, 0x00000000, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0xb5ad5294, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0x000d6b5a,
        0x00000000, 0x00000000, 0xa5290252, 0x00025204, 0x00000000, 0x12948120,
        0x94800000, 0x24094a52, 0x00024090, 0x00000280, 0x00000000, 0x00000948,
        0x01294a52, 0x29480000, 0x4a520025, 0x5294a529, 0x94a5294a, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x094a4000,
        0x4a520000, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x265294a5, 0x5294a525, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x00002529, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x94a52900,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x52948129, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x00000004, 0x00000000, 0x00000000, 0x00000000,
        0xa5294a52, 0x004a5294, 0x00000000, 0x00000000, 0x00000000, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x84210894,
        0x21084210, 0x08421084, 0x00000421, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x29480000, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x094a5294, 0x4a5294a4, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x52948009, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x52902529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xa4000000, 0x004a5294, 0x01ad6800,
        0x40000000, 0x94a5294a, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x68000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x0025294a, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a52902, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x00000009, 0x00000000, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x00002529,
        0x00000000, 0x00000000, 0x00000000, 0x4a520000, 0x5294a529, 0x0000094a,
        0x01294a51, 0x294a5200, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0x00000012,
        0xd6b40000, 0x0012001a, 0x00948000, 0x94a40000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xa0000000,
        0x00012935, 0x00000012, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000900, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0x00094a52, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04a40000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x4a520000, 0x5294a529, 0x94a5294a, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x04a52000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x4a400000, 0x5294a529, 0x94a5294a,
        0x00000000, 0x20000000, 0x000094a5, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x52900000, 0x0000004a,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x94800000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x90000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0x00000000, 0x00000000,
        0x4a520000, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x00000004, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x000094a4, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x35ad6800,
        0xad6b5ad9, 0x949ad6b5, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x6b400000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x01ad0000, 0x00000000, 0x00000000, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0x00000252, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00001200, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x40003400, 0x06800003, 0x00000000, 0x00000000,
        0x00000000, 0x5a000000, 0xd94a5203, 0x00000000, 0x4a000000, 0x00000001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x0094a520, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x1ad00000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x5ad6b5ad, 0xd6b5ad6b, 0x01ad6b5a, 0x00000000, 0x68000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x40000000,
        0xd6b5ad6b, 0x0000001a, 0x00000000, 0x00000000, 0x00000000, 0xd6b5ad68,
        0x01ad6b5a, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x000035ad, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x80000000, 0xad6b4006, 0x001ad001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x1a000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xd6b5a000, 0x35a0035a,
        0x00035a00, 0x00000000, 0x00068000, 0xd0000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000d000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xb40d0000, 0x0d6800d6, 0x6b400000, 0x000001a0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xd0000000, 0x0000001a,
        0x00034000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x09480000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x1a000000, 0x00000d00, 0x0000001a, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x1b460000, 0xc6318c63,
        0x318d2318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0x108418c6, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x94884210, 0xa5294a52, 0x294a5294, 0x108494a5, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x39ce9108, 0xce739ce7, 0x739ce739, 0x9ce739ce, 0xe739ce73, 0x1084739c,
        0x84210842, 0x94a44210, 0x5ad6b5ad, 0xd6b5ad6b, 0x4a526b5a, 0x5294a529,
        0x00000002, 0x5ad6b5ad, 0xd6b5ad6b, 0x4a526b5a, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x324c94a5, 0x52949920, 0x54a5294a, 0xa524a652,
        0x09295204, 0x10840000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x71084210,
        0x94a54a40, 0xc4ca5294, 0x21086312, 0x08421084, 0x94a52931, 0x00000012,
        0x00000000, 0x00000000, 0x00000000, 0x94a52900, 0x00000012, 0x00000000,
        0x00000000, 0x00000000, 0x94a52900, 0x25294a52, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x9529494a,
        0x294a5202, 0x39ce04a5, 0x4e739ce7, 0x73a5294a, 0x00000240, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a520001, 0x5294a529, 0x0001294a, 0x00000012,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x001a0000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x1084210d,
        0x84210842, 0x21084210, 0x08421084, 0x00000421, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xad6b4000, 0x00000035,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6,
        0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x90c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0x5a36b5a3, 0xd18c631b,
        0x8c636b5a, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6,
        0xad18c631, 0x68c631b5, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0x5a318c63, 0x318c631b, 0x8c6318c6,
        0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x4318c631, 0x94a5294a,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x5ad21084, 0x4210846b, 0xad6b2108,
        0x6b5ad6b5, 0x21084211, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x1ad6b5ad, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0xc6318c63, 0xd68c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x108418c6,
        0x84210842, 0x21084210, 0x48421084, 0xd6b5ad6b, 0x108d6b5a, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x8c632108, 0x6318c631, 0x18c6318c,
        0xdad6b463, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6,
        0x6318c631, 0x18c6318c, 0x000001a0, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xad000000, 0x6b5ad6b5,
        0x5ad6b5ad, 0x00000003, 0x48000000, 0x5294a529, 0x94a5294a, 0x25294a52,
        0x00000000, 0x800d0000, 0x000000d6, 0x68000000, 0x000001ad, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,
        0xa0035ad6, 0x00000035, 0x00003400, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x000035ad, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x06b5ad68, 0xb5ad6b5a, 0x000000d6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,
        0x00000006, 0x00000000, 0x000001ad, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xad6b4000, 0x035ad6b5,
        0x00000000, 0xd6b5a000, 0x00006800, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x01ad6800,
        0x006b40d0, 0x03400000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x68000000, 0x5ad68000, 0x0035ad6b, 0x00000000,
        0x00000000, 0x00000000, 0x000001ad, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000d680,
        0x0000000d, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x40000000,
        0xd6b5ad6b, 0xb5ad0000, 0x000000d6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xad000000, 0x6b5ad6b5, 0x40d6b400, 0x00000003, 0x00000000, 0x00000000,
        0x03400000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x80000000, 0x0d6b5ad6, 0x68000034, 0x0006b40d, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xb4000000, 0x00001ad6, 0x681ad000,
        0x0000000d, 0x00000000, 0x00000000, 0x00000000, 0x001ad000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,
        0xad6b5ad6, 0x681a0035, 0x0000000d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xa5294a52, 0x294a5294, 0x00000001, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x06800000, 0xb5ad001a, 0x00681ad6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x6b5a0000, 0x1ad6b400, 0x06b5ad68, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xb5ad6800,
        0xa06b5ad6, 0x00000035, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0340d680, 0x00068000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x006b5ad0, 0x000006b4, 0x0000000d,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x5ad6b5a0, 0x0035a003,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,
        0x0d6b5ad6, 0x035ad680, 0x00000000, 0x00000068, 0xb5a00000, 0xa0035ad6,
        0x000006b5, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xd6b40000, 0xb5ad6b5a, 0xad035ad6, 0x00000001, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xb5ad0000, 0xad035ad6, 0x001ad6b5,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xb4000000, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b4006b, 0xb40d6b5a,
        0x00035a06, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xb5a00000, 0x00035ad6, 0x681ad034, 0x1ad6b5ad, 0x00000068,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x01ad0000, 0x00681a00,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x80000000, 0x000000d6, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x5294a400, 0x5295294a, 0xa5294a4a, 0x294a5294, 0x025294a5,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xb5ad0000, 0x000000d6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xb5ad0000,
        0x00035ad6, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00006800, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x35ad6800, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00d04800,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x035a0000, 0x000739ce, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad001a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0x00000003,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0001ad68, 0x00000000, 0xce739ce7, 0x6b5ad6b9, 0x5a0035ad, 0x06b5ad6b,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xd6b40000, 0x0000001a,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x004a4000, 0x00000000, 0x00000000, 0x00000000,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0x24d6b652, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x0004a529, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000900, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00002400, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00009000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00024000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00090000, 0x00000000, 0x21084200, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0x00035ad6, 0x6b5ad680, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0x00000000, 0x00001a00, 0x00000000,
        0x00d00000, 0x00000000, 0x00000000, 0x00000000, 0x6b5ad680, 0x5ad6b5a0,
        0xd6b5ad6b, 0x00006b5a, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x5ad6b5ad, 0xd6b5ad03, 0xb5ad6b5a, 0x0d6b5ad6,
        0x6b5ad680, 0x40d681ad, 0x0035ad6b, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000340,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xd0000000, 0x00006b5a, 0x00000000, 0x50000000,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0xb5ad18c6, 0x631b5ad6, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6,
        0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0x5ad18c63, 0x31b5ad6b, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6,
        0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0xc6318c63, 0x318c6318, 0x108418c6, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0xc6318c63, 0x318c6318,
        0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6,
        0x6318c631, 0x18c6318c, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x8c632108, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x12522108, 0x84210842, 0x21084210,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x094a5294, 0x4a520000, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x00000009,
        0x00000000, 0xa5294a52, 0x294a5294, 0x4a4004a5, 0x5294a529, 0x94a5294a,
        0xa5294a40, 0x294a5294, 0x4a4094a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x00002529, 0x00000000, 0x10842108, 0x29210842,
        0x000094a5, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00009000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x29480000, 0x000094a5, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000024, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x25294a52,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x0094a529,
        0x94a40000, 0xa5294a52, 0x294a5294, 0x4a520001, 0x5294a529, 0x0001294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x00000009, 0x00000000, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x1294a529, 0x00000000, 0xa5294a52,
        0x094a5294, 0x00120000, 0x00000000, 0x00000000, 0xa5294a52, 0x094a5294,
        0x4a520000, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x00000094, 0x4a520000, 0x5294a529,
        0x00000002, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x00000094, 0x4a520000, 0x5294a529, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x02520025, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x00000009, 0x00000000, 0xa5294a52,
        0x294a5294, 0x4a520025, 0x52000129, 0x0001294a, 0xa5294a52, 0x00000004,
        0x4a520000, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a520001,
        0x5294a529, 0x0000004a, 0x25294a52, 0x00000000, 0x4a520000, 0x5294a529,
        0x00000002, 0xa5294a52, 0x00000094, 0x4a520000, 0x0004a529, 0x00000000,
        0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a520, 0x94a5294a, 0xa5294a52,
        0x294a5294, 0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x004a5294,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x21080000,
        0x08421084, 0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x73800000, 0x9ce739ce, 0xe739ce73,
        0x39ce739c, 0xce739ce7, 0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c,
        0xce739ce7, 0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c, 0xce739ce7,
        0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c, 0xce739ce7, 0x739ce739,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0x39ce6b5a, 0xce739ce7, 0x739ce739, 0x00000000,
    ],
    bits: 5,
    default: 0,
};

pub(crate) static COMBINING_CLASS: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0xffff, 0xffff, 0x0001, 0xffff, 0x0002,
        0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b, 0x000b, 0x000b, 0x000c,
        0x000d, 0x000b, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0016, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0017, 0x0018,
        0xffff, 0x0019, 0x001a, 0xffff, 0x001b, 0x001c, 0x001d, 0x001e, 0x001f, 0x0020, 0xffff, 0x0021,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0023, 0x0024, 0x0025, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0026, 0x0027, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0028, 0x0029, 0xffff, 0xffff,
        0x002a, 0x002b, 0x002c, 0x002d, 0xffff, 0x002e, 0xffff, 0x002f, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0030, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0031, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0032,
        0xffff, 0x0033, 0x0034, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0035, 0x0036, 0xffff, 0xffff, 0xffff, 0xffff, 0x0037, 0xffff,
        0xffff, 0x0038, 0x0039, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x0041, 0xffff,
        0x0042, 0x0043, 0xffff, 0x0044, 0x0045, 0x0046, 0x0047, 0xffff, 0x003c, 0xffff, 0x0048, 0x0049,
        0x004a, 0x004b, 0xffff, 0xffff, 0x0045, 0xffff, 0x004c, 0x004d, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x004e, 0x004f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0050, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0x0051, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0052, 0x0053, 0x0054, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0055, 0xffff, 0x004f, 0xffff, 0xffff, 0x0056, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0057, 0x0058, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xdcdce8e6,
        0xd8e8dcdc, 0xdcdcdcdc, 0xdccacadc, 0xcadcdcdc, 0xdcdcdcca, 0xdcdcdcdc,
        0xdcdcdcdc, 0x01010101, 0xdcdcdc01, 0xe6e6e6dc, 0xe6e6e6e6, 0xdce6f0e6,
        0xe6e6dcdc, 0x00dcdce6, 0xdce6e6e6, 0xe6dcdcdc, 0xe6dcdce8, 0xe9eaeae9,
        0xe6e9eaea, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6000000, 0xe6e6e6e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6e6dc00, 0xe6dce6e6, 0xdcdee6e6, 0xe6e6e6e6,
        0xdcdce6e6, 0xdcdcdcdc, 0xe6dce6e6, 0xe6e4dee6, 0x0d0c0b0a, 0x11100f0e,
        0x14131312, 0x17001615, 0x00191800, 0x1200dce6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e6e6e6, 0xe6e6e6e6,
        0x00201f1e, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x1b000000, 0x1f1e1d1c, 0xe6222120, 0xe6dcdce6, 0xe6e6e6e6, 0xdce6e6dc,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000023, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e60000,
        0xe6e6e6e6, 0xe60000e6, 0xdce6e6e6, 0xe60000e6, 0xe6dc00e6, 0x0000dce6,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00002400, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e6dce6, 0xdce6e6dc,
        0xdce6dcdc, 0xe6dce6dc, 0xe6dce6e6, 0xe6dce6dc, 0x00e6e6dc, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6000000, 0xe6e6e6e6, 0xe6dce6e6, 0x00000000,
        0x00000000, 0x0000dc00, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xe6e60000, 0xe600e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e600,
        0xe6e6e600, 0x0000e6e6, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xdcdcdc00, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xdcdcdce6, 0xe6e6e6e6,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e60000, 0xdce6e6e6,
        0xdcdcdcdc, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xdc00e6e6, 0xe6dce6e6,
        0xe6e6dce6, 0xdcdcdce6, 0xe61d1c1b, 0xe6dce6e6, 0xe6dcdce6, 0xe6e6e6e6,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000007, 0x00000000, 0x00000000,
        0x00000000, 0x00000900, 0xe6dce600, 0x000000e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000007,
        0x00000000, 0x00000000, 0x00000000, 0x00000900, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00e60000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000007, 0x00000000, 0x00000000, 0x00000000, 0x00000900,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000900, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000007,
        0x00000000, 0x00000000, 0x00000000, 0x00000900, 0x00000000, 0x005b5400,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x09000000, 0x00000009, 0x00000000, 0x00000000, 0x00000000, 0x00000900,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00090000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00096767, 0x00000000,
        0x00000000, 0x00000000, 0x6b6b6b6b, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00097676, 0x00000000, 0x00000000, 0x00000000, 0x7a7a7a7a, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0000dcdc, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xdc00dc00, 0x0000d800, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00828100, 0x00000084,
        0x82820000, 0x00008282, 0xe6e60082, 0xe6e60009, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00dc0000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x07000000,
        0x00090900, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0000dc00, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xe6e6e600, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000909, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000009,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00090000, 0x00000000, 0x00000000, 0x0000e600,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0000e400, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xdce6de00, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6000000,
        0x000000dc, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000009, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e6e600,
        0xe6e6e6e6, 0xdc0000e6, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6e6e6e6, 0xdcdcdce6, 0xe6dcdcdc, 0xdc00dce6,
        0xdce6e6dc, 0xe6e6e6dc, 0xe6dce6e6, 0x00e6e6e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000007,
        0x00000000, 0x00000000, 0x00000000, 0x00000009, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xe6000000, 0xe6e6e6dc, 0xe6e6e6e6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x09090000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00070000, 0x00000000, 0x00000000, 0x09090000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x07000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00e6e6e6, 0xdcdcdc01, 0xe6e6dcdc, 0xdcdcdcdc, 0x010100e6, 0x01010101,
        0x00000001, 0x0000dc00, 0x00000000, 0x000000e6, 0x0000e6e6, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6dce6e6, 0xe6e6e6e6,
        0xe6dce6e6, 0xdcd6eae6, 0xe6e6e6ca, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6,
        0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe4e8e6e6,
        0xe6dadce4, 0xdce6dce9, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0101e6e6, 0xe6e6e6e6,
        0xe6010101, 0x000000e6, 0x0000e600, 0xe6010100, 0x0101e6dc, 0xdcdcdcdc,
        0x000000e6, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xe6000000, 0x0000e6e6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x09000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6,
        0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe4da0000, 0xe0e0dee8, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00080800, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6000000,
        0x00000000, 0xe6e6e6e6, 0xe6e6e6e6, 0x0000e6e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e60000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x0000e6e6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00090000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000009,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000009, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6,
        0x0000e6e6, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xdc000000, 0x0000dcdc, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x09000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x07000000, 0x00000000, 0x00000000, 0x00000000, 0x00000009, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6e600e6, 0xe60000dc, 0x000000e6, 0xe6e60000,
        0x0000e600, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00090000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000900, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x001a0000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e6e6e6, 0xdce6e6e6,
        0xdcdcdcdc, 0xe6e6dcdc, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000dc00,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x000000dc, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xe6e60000, 0x00e6e6e6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xe600dc00, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00dc01e6, 0x09000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00dce600, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e6e6e6,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6000000, 0x000000e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xdcdc0000,
        0xdce6e6e6, 0xdcdcdce6, 0x000000dc, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xdce60000, 0x0000dce6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00090000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000009, 0x00000000, 0x00000000, 0x09000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00070900, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00e6e6e6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x09000000, 0x00000009, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x07000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000009, 0x00000000, 0x00070000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00070900, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00090700, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x07000000, 0x00000007, 0x00000000, 0x00000000, 0x00000000, 0x00000900,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e60000,
        0xe6e6e6e6, 0x000000e6, 0xe6e6e6e6, 0x000000e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00090000, 0x00070000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00e60000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x07090000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x09000000, 0x00000007, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x09000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x07090000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x09000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00090900, 0x07000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000009, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000009,
        0x00000000, 0x00000000, 0x00000000, 0x09000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000900, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00070000, 0x00000909, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x09000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x01010101, 0x00000001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6e6e6e6, 0x00e6e6e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000606, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00010000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x01d8d800, 0x00000101, 0xd8d8e200,
        0x00d8d8d8, 0x00000000, 0xdc000000, 0xdcdcdcdc, 0x00dcdcdc, 0xe6e6e600,
        0xdcdce6e6, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6e60000, 0x0000e6e6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xe6e60000, 0x000000e6,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe6e6e6e6, 0x00e6e6e6, 0xe6e6e6e6, 0xe6e6e6e6,
        0xe6e6e6e6, 0xe6e6e6e6, 0xe60000e6, 0xe6e6e6e6, 0xe600e6e6, 0xe6e600e6,
        0x00e6e6e6, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00e60000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xe6e6e6e6, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xdcdcdcdc, 0x00dcdcdc, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xe6e6e6e6, 0x0007e6e6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 8,
    default: 0,
};

pub(crate) static JOINING_TYPE: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0002, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0xffff, 0xffff, 0x0002, 0xffff, 0x0003,
        0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f,
        0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0xffff, 0xffff,
        0xffff, 0xffff, 0x001a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001b, 0x001c,
        0x001d, 0x001e, 0x001f, 0xffff, 0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0xffff, 0x0026,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0027, 0x0028, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0029, 0x002a, 0x002b, 0xffff, 0xffff, 0xffff, 0xffff,
        0x002c, 0x002d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002e, 0x002f, 0xffff, 0xffff,
        0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0xffff, 0x0036, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0037, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0038, 0x002a, 0xffff, 0x0039, 0xffff, 0xffff, 0xffff, 0x003a,
        0xffff, 0x003b, 0x003c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x003d, 0x003e, 0xffff, 0x003f, 0xffff, 0xffff, 0x0040, 0xffff,
        0xffff, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004a, 0xffff,
        0x004b, 0x004c, 0xffff, 0x004d, 0x004e, 0x004f, 0x0050, 0xffff, 0x0051, 0xffff, 0x0052, 0x0053,
        0x0054, 0x0055, 0xffff, 0xffff, 0x0056, 0x0057, 0x0058, 0x0059, 0xffff, 0x005a, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x005b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x005c, 0x005d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x005e, 0x005f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0x0060, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0061, 0xffff, 0xffff, 0xffff, 0x0062, 0x0063, 0x0064, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0065, 0x0066, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0067, 0xffff, 0x005d, 0xffff, 0xffff, 0x0068, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0069, 0x006a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x006b, 0xffff, 0x006c, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000080, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x00002492, 0x00000000,
        0x09249200, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x92480000, 0x24924924, 0x49249249, 0x92492492, 0x20924924,
        0x00209048, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x92490000, 0x00104924, 0x65964905, 0xdb2496db, 0xb6db6db6,
        0x6cb6db6a, 0x92492493, 0x24924924, 0x00000000, 0x0921b400, 0xb6db6d92,
        0x24b6db6d, 0x49249249, 0xb6db6492, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6,
        0x2492496c, 0x092d9659, 0x20124926, 0x41201249, 0x00009092, 0xa05b4000,
        0x00000000, 0x5b4c2000, 0xb2db6492, 0x2cb6db6d, 0x924996cb, 0x24924924,
        0x49249249, 0xdb6db600, 0xb6d925b6, 0x6db6db6d, 0xc965b6c9, 0xb6db64b6,
        0x00000000, 0x00000000, 0x00000000, 0x49240000, 0x00012492, 0x00000000,
        0x40000000, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0x02492493, 0x00808000,
        0x00000000, 0x00000000, 0x24920924, 0x48248249, 0x00000092, 0x00000000,
        0x6592db6c, 0xcb6db6db, 0x00024c92, 0x2582db45, 0x49240001, 0x92492492,
        0x68152524, 0x000012db, 0x24924900, 0x2db6db6d, 0xdb25b049, 0xb6db65b6,
        0x45b6db6d, 0x92492492, 0x24924924, 0x49249209, 0x92492492, 0x24924924,
        0x00000049, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00104000,
        0x01249248, 0x92480080, 0x00000024, 0x00000240, 0x00000000, 0x00000000,
        0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00100000,
        0x00001248, 0x00000080, 0x00000000, 0x00000240, 0x00000000, 0x04000000,
        0x00000048, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00100000,
        0x01200048, 0x00080092, 0x00000000, 0x00000000, 0x80090000, 0x00000000,
        0x00000048, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00100000,
        0x01209248, 0x00000080, 0x00000000, 0x00000240, 0x00000000, 0x24924000,
        0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x20100000,
        0x00001248, 0x80000080, 0x00000004, 0x00000240, 0x00000000, 0x00000000,
        0x00000040, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000001, 0x00000080, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00001001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x24100000,
        0x41240001, 0x80000092, 0x00000004, 0x00000240, 0x00000000, 0x00000000,
        0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x20100000,
        0x00040000, 0x00000090, 0x00000000, 0x00000240, 0x00000000, 0x00000000,
        0x00000009, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00120000,
        0x00001248, 0x00000080, 0x00000000, 0x00000240, 0x00000000, 0x00000000,
        0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x40000000, 0x12400000, 0x00000004, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x90080000, 0x00004924,
        0x49200000, 0x00000492, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x90080000, 0x00124924,
        0x49000000, 0x00000092, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000900, 0x00000000, 0x80000000, 0x00000820,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92480000, 0x04924924,
        0x00241249, 0x92492480, 0x24924824, 0x49249249, 0x92492492, 0x00124924,
        0x00040000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92412480, 0x04804824,
        0x00000000, 0x00000000, 0x24000900, 0x00000001, 0x12480000, 0x00000000,
        0x00048040, 0x00000080, 0x00800000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x24800000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x12400000, 0x00000000, 0x00000000, 0x02400000, 0x00000000,
        0x00000000, 0x02400000, 0x00000000, 0x00000000, 0x02400000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x90000000, 0x00924920,
        0x48040000, 0x02492492, 0x00800000, 0x00000000, 0x00000000, 0x00000000,
        0x80a00000, 0x00002092, 0x00000000, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6,
        0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0x000005b6,
        0x6da48000, 0xdb6db6db, 0xb6db6db6, 0x4db6db6d, 0x00000001, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x01200049, 0x00400000, 0x00024800,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00020120, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x04924904, 0x49248041, 0x92000012, 0x20124924,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92490000, 0x24924924,
        0x49249249, 0x00000492, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000249, 0x00000000, 0x00000000, 0x00000000, 0x10000000, 0x00104924,
        0x00000040, 0x00000000, 0x00000000, 0x00000000, 0x02492492, 0x00000000,
        0x00000009, 0x00000000, 0x00000000, 0x09009240, 0x00000092, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x09040000, 0x00092080, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x02492490, 0x00000024,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x90490000, 0x24924924, 0x01249241, 0x10000080, 0x00000900,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x00000000, 0x00002502, 0x00000000, 0x40000000, 0x00000492, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x40001249, 0x00002492, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x92490000, 0x24924924, 0x49249249, 0x00012492, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00092000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x20000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x49249249, 0x92492492, 0x24924924,
        0x00000000, 0x00000000, 0x00000000, 0x40000000, 0x00000092, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00004800, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x90492000, 0x00924924,
        0x00000000, 0x00000000, 0x24000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00090000, 0x00000000,
        0x00040040, 0x00000002, 0x00000000, 0x00048000, 0x00000010, 0x00000000,
        0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0x00edb6db, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00009000, 0x00000000, 0x00000000, 0x49249249, 0x00092492, 0x20000000,
        0x00000000, 0x00000000, 0x00000000, 0x49240000, 0x00000092, 0x00000000,
        0x49200000, 0x00092492, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000049, 0x00000000, 0x00000000, 0x00000000, 0x02000000, 0x00900924,
        0x00000000, 0x00000000, 0x00000000, 0x00008000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x48000000, 0x80480492, 0x00000004,
        0x00000200, 0x00000010, 0x00000000, 0x00000000, 0x00000000, 0x00100000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x12410000, 0x24000120,
        0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000090, 0x00000004,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x01008000, 0x00000080, 0x00000000,
        0x00000000, 0x00000000, 0x04000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x49249249, 0x00002492, 0x00000000, 0x49249249, 0x00002492, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00024800,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00800000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00004924,
        0x00048248, 0x00002490, 0x00000000, 0x00000000, 0x00000000, 0x20004900,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x20825b6d, 0xdb249181, 0xb65b6d76, 0x0004c025, 0x000096da, 0x00000000,
        0x65b64965, 0x002592cb, 0x00000000, 0x20000000, 0x000016c9, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x6db6db6b, 0xdb6db6db, 0xb6db6db6, 0x00249b2d, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000012, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xd96d0000, 0xb6db6db6,
        0x49245b6d, 0x4b692492, 0x00000000, 0x00000000, 0x4b6d0000, 0xb6db6db6,
        0x0000926d, 0x00000000, 0x00000000, 0x00000000, 0x4b450000, 0xb65b2512,
        0x60005928, 0x00000007, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x24924900,
        0x00049249, 0x00000000, 0x00000000, 0x00000000, 0x12010000, 0x20000000,
        0x00000009, 0x00000000, 0x00000000, 0x00000000, 0x92000000, 0x00004804,
        0x00000040, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000049, 0x00000000, 0x00000000, 0x49200000, 0x12492482, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x02000000, 0x00000000,
        0x00000009, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04924924,
        0x48000000, 0x00002012, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10092000, 0x04000024,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x20000000, 0x49249200, 0x00000000, 0x00000000,
        0x00000009, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00120000,
        0x00000001, 0x00000000, 0x00000000, 0x49240000, 0x12490012, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x24924900,
        0x00041240, 0x00000000, 0x04000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92000000, 0x20004124,
        0x00000241, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92400000, 0x20900000,
        0x00000001, 0x00000000, 0x00900000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92000000, 0x20804924,
        0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92490082, 0x00000020,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x24800000, 0x49209240, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92492000, 0x00004824,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04120000,
        0x00000200, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x90000000, 0x00024024, 0x00000001, 0x00000000, 0x00000000,
        0x49249248, 0x00000000, 0x00000000, 0x00000000, 0x92000000, 0x04920124,
        0x00200000, 0x92480000, 0x00024804, 0x00000000, 0x00000000, 0x00000000,
        0x40000000, 0x92492492, 0x00000904, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92490000, 0x20924904,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x92400000, 0x24924924, 0x40249249, 0x82412492, 0x00000004,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92480000, 0x20904004,
        0x00209249, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x80090000, 0x00000020, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x12000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92490000, 0x00000124,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x12490000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x92490000, 0x00000004,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00002000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00492000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00001000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x04800000, 0x00000249, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92490092, 0x24924924,
        0x00049249, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x09200000, 0x92000000, 0x24924924,
        0x49248049, 0x00000002, 0x00000000, 0x40000000, 0x00000092, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00001240, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24920004,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x80000012, 0x00000000,
        0x00001000, 0x00000000, 0x24920000, 0x49249248, 0x00002492, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x49049249, 0x92492492, 0x24920124, 0x49241209, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000400, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00002490, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x92490000, 0x00000004, 0x00000000, 0x00000000, 0x00000000,
        0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6,
        0x49249b6d, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000008, 0x00000000, 0x00000000, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x00000000,
    ],
    bits: 3,
    default: 0,
};

pub(crate) static JOINING_GROUP: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0000, 0x0001, 0x0002, 0xffff, 0x0003, 0x0004, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0005, 0xffff, 0xffff, 0xffff, 0xffff, 0x0006, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00c18061, 0x870d8436, 0x9930e1ed, 0xa70a144c, 0x468d3a73,
        0x210259b3, 0x1a346912, 0xe3530780, 0xe02f2231, 0x00001870, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x8300981c, 0x803000c1, 0xe1c3e1c1, 0x0e1c3870, 0x3264c987, 0x0a264c99,
        0x50a14285, 0xa70a1428, 0x3a74e9d3, 0x74e74e9d, 0xb3468d3a, 0xf1e3c784,
        0xcc983c78, 0xd1a235c8, 0x48912268, 0x78f11224, 0x12241e3c, 0x26765489,
        0x0b860c5b, 0x60c18306, 0x18dc1830, 0xb0e1c037, 0x02d80c58, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00009c28, 0x00000000,
        0x34c00000, 0x3a00004a, 0x00000000, 0x00000000, 0x00000000, 0x00050000,
        0x2c592242, 0xa673582c, 0x379725db, 0x0a92639f, 0xd29f2c61, 0x45aaa2e6,
        0x00001648, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x38000000, 0xc3871c73, 0x1c3870e1, 0xc2851326, 0x08102539, 0x1224478f,
        0x48911a31, 0x9ce9c7a4, 0xe753264e, 0x346860c4, 0x227060c2, 0x354e9931,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x5549d0a4, 0xa2508132, 0x00000a51,
        0x83060000, 0x183060c1, 0xc183060c, 0x0c183060, 0x00018306, 0x00017800,
        0x8d9b24e4, 0x0000017c, 0x00000000, 0x00000000, 0x00000000, 0xfb24c387,
        0xe18c7a60, 0x050c13b0, 0xab11a228, 0x1e61a093, 0x3867070e, 0x0e1c1030,
        0x30844987, 0x113c4c98, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x162b56ab, 0x80860173,
        0x90001162, 0x1a348901, 0xda0af6ad, 0x2b163d6e, 0x74e9e397, 0xe0001dba,
        0x00000003, 0xfb070000, 0x00006709, 0x00000000, 0x00000000, 0x00000000,
        0x00054000, 0x80000000, 0x0000000a, 0x00000000, 0x00000000, 0x000a0000,
        0x00500150, 0x02800014, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 7,
    default: 0,
};

pub(crate) static JOINING_GROUP_NAMES: [&str; 104] = [
    "No Joining Group",
    "African Feh",
    "African Noon",
    "African Qaf",
    "Ain",
    "Alaph",
    "Alef",
    "Beh",
    "Beth",
    "Burushaski Yeh Barree",
    "Dal",
    "Dalath Rish",
    "E",
    "Farsi Yeh",
    "Fe",
    "Feh",
    "Final Semkath",
    "Gaf",
    "Gamal",
    "Hah",
    "Hanifi Rohingya Kinna Ya",
    "Hanifi Rohingya Pa",
    "He",
    "Heh",
    "Heh Goal",
    "Heth",
    "Kaf",
    "Kaph",
    "Khaph",
    "Knotted Heh",
    "Lam",
    "Lamadh",
    "Malayalam Bha",
    "Malayalam Ja",
    "Malayalam Lla",
    "Malayalam Llla",
    "Malayalam Nga",
    "Malayalam Nna",
    "Malayalam Nnna",
    "Malayalam Nya",
    "Malayalam Ra",
    "Malayalam Ssa",
    "Malayalam Tta",
    "Manichaean Aleph",
    "Manichaean Ayin",
    "Manichaean Beth",
    "Manichaean Daleth",
    "Manichaean Dhamedh",
    "Manichaean Five",
    "Manichaean Gimel",
    "Manichaean Heth",
    "Manichaean Hundred",
    "Manichaean Kaph",
    "Manichaean Lamedh",
    "Manichaean Mem",
    "Manichaean Nun",
    "Manichaean One",
    "Manichaean Pe",
    "Manichaean Qoph",
    "Manichaean Resh",
    "Manichaean Sadhe",
    "Manichaean Samekh",
    "Manichaean Taw",
    "Manichaean Ten",
    "Manichaean Teth",
    "Manichaean Thamedh",
    "Manichaean Twenty",
    "Manichaean Waw",
    "Manichaean Yodh",
    "Manichaean Zayin",
    "Meem",
    "Mim",
    "Noon",
    "Nun",
    "Nya",
    "Pe",
    "Qaf",
    "Qaph",
    "Reh",
    "Reversed Pe",
    "Rohingya Yeh",
    "Sad",
    "Sadhe",
    "Seen",
    "Semkath",
    "Shin",
    "Straight Waw",
    "Swash Kaf",
    "Syriac Waw",
    "Tah",
    "Taw",
    "Teh Marbuta",
    "Teh Marbuta Goal",
    "Teth",
    "Thin Yeh",
    "Vertical Tail",
    "Waw",
    "Yeh",
    "Yeh Barree",
    "Yeh With Tail",
    "Yudh",
    "Yudh He",
    "Zain",
    "Zhain",
];

impl UcJoiningGroup {
    pub const NONE: UcJoiningGroup = UcJoiningGroup(0);
    pub const AFRICAN_FEH: UcJoiningGroup = UcJoiningGroup(1);
    pub const AFRICAN_NOON: UcJoiningGroup = UcJoiningGroup(2);
    pub const AFRICAN_QAF: UcJoiningGroup = UcJoiningGroup(3);
    pub const AIN: UcJoiningGroup = UcJoiningGroup(4);
    pub const ALAPH: UcJoiningGroup = UcJoiningGroup(5);
    pub const ALEF: UcJoiningGroup = UcJoiningGroup(6);
    pub const BEH: UcJoiningGroup = UcJoiningGroup(7);
    pub const BETH: UcJoiningGroup = UcJoiningGroup(8);
    pub const BURUSHASKI_YEH_BARREE: UcJoiningGroup = UcJoiningGroup(9);
    pub const DAL: UcJoiningGroup = UcJoiningGroup(10);
    pub const DALATH_RISH: UcJoiningGroup = UcJoiningGroup(11);
    pub const E: UcJoiningGroup = UcJoiningGroup(12);
    pub const FARSI_YEH: UcJoiningGroup = UcJoiningGroup(13);
    pub const FE: UcJoiningGroup = UcJoiningGroup(14);
    pub const FEH: UcJoiningGroup = UcJoiningGroup(15);
    pub const FINAL_SEMKATH: UcJoiningGroup = UcJoiningGroup(16);
    pub const GAF: UcJoiningGroup = UcJoiningGroup(17);
    pub const GAMAL: UcJoiningGroup = UcJoiningGroup(18);
    pub const HAH: UcJoiningGroup = UcJoiningGroup(19);
    pub const HANIFI_ROHINGYA_KINNA_YA: UcJoiningGroup = UcJoiningGroup(20);
    pub const HANIFI_ROHINGYA_PA: UcJoiningGroup = UcJoiningGroup(21);
    pub const HE: UcJoiningGroup = UcJoiningGroup(22);
    pub const HEH: UcJoiningGroup = UcJoiningGroup(23);
    pub const HEH_GOAL: UcJoiningGroup = UcJoiningGroup(24);
    pub const HETH: UcJoiningGroup = UcJoiningGroup(25);
    pub const KAF: UcJoiningGroup = UcJoiningGroup(26);
    pub const KAPH: UcJoiningGroup = UcJoiningGroup(27);
    pub const KHAPH: UcJoiningGroup = UcJoiningGroup(28);
    pub const KNOTTED_HEH: UcJoiningGroup = UcJoiningGroup(29);
    pub const LAM: UcJoiningGroup = UcJoiningGroup(30);
    pub const LAMADH: UcJoiningGroup = UcJoiningGroup(31);
    pub const MALAYALAM_BHA: UcJoiningGroup = UcJoiningGroup(32);
    pub const MALAYALAM_JA: UcJoiningGroup = UcJoiningGroup(33);
    pub const MALAYALAM_LLA: UcJoiningGroup = UcJoiningGroup(34);
    pub const MALAYALAM_LLLA: UcJoiningGroup = UcJoiningGroup(35);
    pub const MALAYALAM_NGA: UcJoiningGroup = UcJoiningGroup(36);
    pub const MALAYALAM_NNA: UcJoiningGroup = UcJoiningGroup(37);
    pub const MALAYALAM_NNNA: UcJoiningGroup = UcJoiningGroup(38);
    pub const MALAYALAM_NYA: UcJoiningGroup = UcJoiningGroup(39);
    pub const MALAYALAM_RA: UcJoiningGroup = UcJoiningGroup(40);
    pub const MALAYALAM_SSA: UcJoiningGroup = UcJoiningGroup(41);
    pub const MALAYALAM_TTA: UcJoiningGroup = UcJoiningGroup(42);
    pub const MANICHAEAN_ALEPH: UcJoiningGroup = UcJoiningGroup(43);
    pub const MANICHAEAN_AYIN: UcJoiningGroup = UcJoiningGroup(44);
    pub const MANICHAEAN_BETH: UcJoiningGroup = UcJoiningGroup(45);
    pub const MANICHAEAN_DALETH: UcJoiningGroup = UcJoiningGroup(46);
    pub const MANICHAEAN_DHAMEDH: UcJoiningGroup = UcJoiningGroup(47);
    pub const MANICHAEAN_FIVE: UcJoiningGroup = UcJoiningGroup(48);
    pub const MANICHAEAN_GIMEL: UcJoiningGroup = UcJoiningGroup(49);
    pub const MANICHAEAN_HETH: UcJoiningGroup = UcJoiningGroup(50);
    pub const MANICHAEAN_HUNDRED: UcJoiningGroup = UcJoiningGroup(51);
    pub const MANICHAEAN_KAPH: UcJoiningGroup = UcJoiningGroup(52);
    pub const MANICHAEAN_LAMEDH: UcJoiningGroup = UcJoiningGroup(53);
    pub const MANICHAEAN_MEM: UcJoiningGroup = UcJoiningGroup(54);
    pub const MANICHAEAN_NUN: UcJoiningGroup = UcJoiningGroup(55);
    pub const MANICHAEAN_ONE: UcJoiningGroup = UcJoiningGroup(56);
    pub const MANICHAEAN_PE: UcJoiningGroup = UcJoiningGroup(57);
    pub const MANICHAEAN_QOPH: UcJoiningGroup = UcJoiningGroup(58);
    pub const MANICHAEAN_RESH: UcJoiningGroup = UcJoiningGroup(59);
    pub const MANICHAEAN_SADHE: UcJoiningGroup = UcJoiningGroup(60);
    pub const MANICHAEAN_SAMEKH: UcJoiningGroup = UcJoiningGroup(61);
    pub const MANICHAEAN_TAW: UcJoiningGroup = UcJoiningGroup(62);
    pub const MANICHAEAN_TEN: UcJoiningGroup = UcJoiningGroup(63);
    pub const MANICHAEAN_TETH: UcJoiningGroup = UcJoiningGroup(64);
    pub const MANICHAEAN_THAMEDH: UcJoiningGroup = UcJoiningGroup(65);
    pub const MANICHAEAN_TWENTY: UcJoiningGroup = UcJoiningGroup(66);
    pub const MANICHAEAN_WAW: UcJoiningGroup = UcJoiningGroup(67);
    pub const MANICHAEAN_YODH: UcJoiningGroup = UcJoiningGroup(68);
    pub const MANICHAEAN_ZAYIN: UcJoiningGroup = UcJoiningGroup(69);
    pub const MEEM: UcJoiningGroup = UcJoiningGroup(70);
    pub const MIM: UcJoiningGroup = UcJoiningGroup(71);
    pub const NOON: UcJoiningGroup = UcJoiningGroup(72);
    pub const NUN: UcJoiningGroup = UcJoiningGroup(73);
    pub const NYA: UcJoiningGroup = UcJoiningGroup(74);
    pub const PE: UcJoiningGroup = UcJoiningGroup(75);
    pub const QAF: UcJoiningGroup = UcJoiningGroup(76);
    pub const QAPH: UcJoiningGroup = UcJoiningGroup(77);
    pub const REH: UcJoiningGroup = UcJoiningGroup(78);
    pub const REVERSED_PE: UcJoiningGroup = UcJoiningGroup(79);
    pub const ROHINGYA_YEH: UcJoiningGroup = UcJoiningGroup(80);
    pub const SAD: UcJoiningGroup = UcJoiningGroup(81);
    pub const SADHE: UcJoiningGroup = UcJoiningGroup(82);
    pub const SEEN: UcJoiningGroup = UcJoiningGroup(83);
    pub const SEMKATH: UcJoiningGroup = UcJoiningGroup(84);
    pub const SHIN: UcJoiningGroup = UcJoiningGroup(85);
    pub const STRAIGHT_WAW: UcJoiningGroup = UcJoiningGroup(86);
    pub const SWASH_KAF: UcJoiningGroup = UcJoiningGroup(87);
    pub const SYRIAC_WAW: UcJoiningGroup = UcJoiningGroup(88);
    pub const TAH: UcJoiningGroup = UcJoiningGroup(89);
    pub const TAW: UcJoiningGroup = UcJoiningGroup(90);
    pub const TEH_MARBUTA: UcJoiningGroup = UcJoiningGroup(91);
    pub const TEH_MARBUTA_GOAL: UcJoiningGroup = UcJoiningGroup(92);
    pub const TETH: UcJoiningGroup = UcJoiningGroup(93);
    pub const THIN_YEH: UcJoiningGroup = UcJoiningGroup(94);
    pub const VERTICAL_TAIL: UcJoiningGroup = UcJoiningGroup(95);
    pub const WAW: UcJoiningGroup = UcJoiningGroup(96);
    pub const YEH: UcJoiningGroup = UcJoiningGroup(97);
    pub const YEH_BARREE: UcJoiningGroup = UcJoiningGroup(98);
    pub const YEH_WITH_TAIL: UcJoiningGroup = UcJoiningGroup(99);
    pub const YUDH: UcJoiningGroup = UcJoiningGroup(100);
    pub const YUDH_HE: UcJoiningGroup = UcJoiningGroup(101);
    pub const ZAIN: UcJoiningGroup = UcJoiningGroup(102);
    pub const ZHAIN: UcJoiningGroup = UcJoiningGroup(103);
}

pub(crate) static SCRIPT: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0004, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009,
        0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015,
        0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x001f, 0x0020, 0x0020,
        0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0025, 0x0025, 0x0025, 0x0025, 0x0026, 0x0027, 0x0028,
        0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034,
        0x0002, 0x0002, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x003a, 0x003b, 0x003b, 0x003b, 0x003b,
        0x003c, 0x003b, 0x003b, 0x003b, 0x003b, 0x003b, 0x003b, 0x003b, 0x003d, 0x003d, 0x003b, 0x003b,
        0x003b, 0x003b, 0x003e, 0x003f, 0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047,
        0x0048, 0x0049, 0x004a, 0x004b, 0x004c, 0x004d, 0x004e, 0x003b, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x004f,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0050, 0x0050, 0x0050, 0x0050,
        0x0050, 0x0050, 0x0050, 0x0050, 0x0050, 0x0051, 0x0052, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056,
        0x0057, 0x0058, 0x0059, 0x005a, 0x005b, 0x005c, 0x005d, 0x005e, 0x0020, 0x0020, 0x0020, 0x0020,
        0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020,
        0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020,
        0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020,
        0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020,
        0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020,
        0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020,
        0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x005f,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0046, 0x0046, 0x0060, 0x0061, 0x0062, 0x0063,
        0x0064, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0x006e,
        0xffff, 0x006f, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0076, 0x0077, 0x0078,
        0x0079, 0x007a, 0x007b, 0x007c, 0x007d, 0x007e, 0x007f, 0x0080, 0x0081, 0x0082, 0x0083, 0xffff,
        0x0084, 0x0085, 0x0086, 0x0087, 0x0088, 0x0089, 0x008a, 0x008b, 0x008c, 0x008d, 0x008e, 0xffff,
        0x008f, 0x0090, 0xffff, 0x0091, 0x0092, 0x0093, 0x0094, 0xffff, 0x0095, 0x0096, 0x0097, 0x0098,
        0x0099, 0x009a, 0xffff, 0xffff, 0x009b, 0x009c, 0x009d, 0x009e, 0xffff, 0x009f, 0xffff, 0x00a0,
        0x00a1, 0x00a1, 0x00a1, 0x00a1, 0x00a1, 0x00a1, 0x00a1, 0x00a2, 0x00a3, 0x00a1, 0x00a4, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00a5, 0x00a6, 0x00a6, 0x00a6, 0x00a6,
        0x00a6, 0x00a6, 0x00a6, 0x00a6, 0x00a7, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00a8, 0x00a8, 0x00a8, 0x00a8, 0x00a9, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00aa, 0x00aa, 0x00aa, 0x00aa, 0x00ab, 0x00ac, 0x00ad, 0x00ae, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00af, 0x00b0, 0x00b1, 0x00b2, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3,
        0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3,
        0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3,
        0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3,
        0x00b3, 0x00b3, 0x00b3, 0x00b4, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b3, 0x00b5, 0x00b5,
        0x00b5, 0x00b6, 0x00b7, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00b8,
        0x00b9, 0x00ba, 0x00bb, 0x00bc, 0x00bc, 0x00bd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00be, 0x00bf, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x00c0, 0x00c1, 0x003b, 0x00c2, 0x00c3, 0x00c4, 0x00c5, 0x00c6, 0x00c7, 0xffff,
        0x00c8, 0x00c9, 0x00ca, 0x003b, 0x003b, 0x00cb, 0x003b, 0x00cc, 0x00cd, 0x00cd, 0x00cd, 0x00cd,
        0x00cd, 0x00ce, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00cf, 0xffff,
        0x00d0, 0xffff, 0x00d1, 0xffff, 0xffff, 0x00d2, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00d3, 0x00d4, 0x00d5, 0x00d6, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00d7, 0x00d8, 0x00d9, 0xffff, 0x00da, 0x00db, 0xffff, 0xffff, 0x00dc, 0x00dd, 0x003b, 0x00de,
        0x00df, 0xffff, 0x003b, 0x003b, 0x003b, 0x003b, 0x003b, 0x003b, 0x003b, 0x00e0, 0x00e1, 0x00e2,
        0x00e3, 0x00e4, 0x003b, 0x003b, 0x00e5, 0x00e6, 0x003b, 0x00e7, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x00e8, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x00e9, 0x0046,
        0x00ea, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x00eb, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x00ec, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0046, 0x0046, 0x0046, 0x0046,
        0x00ed, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046, 0x0046,
        0x0046, 0x0046, 0x00ee, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00ef, 0xffff, 0x00f0, 0x00f1,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x46464619, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x19464646, 0x19191919,
        0x46464619, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x19464646, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19461919, 0x19191919, 0x19191919, 0x19191919, 0x19461919, 0x19191919,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x19464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x19464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x19191946, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x46464646, 0x19191946, 0x0d0d1919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x2c2c2c2c, 0x2c2c2c19, 0x2c2c0000, 0x2c192c2c, 0x00000000, 0x192c192c,
        0x002c2c2c, 0x2c2c002c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c002c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x1a1a2c2c, 0x1a1a1a1a,
        0x1a1a1a1a, 0x1a1a1a1a, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e38381e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x05050500, 0x05050505,
        0x05050505, 0x05050505, 0x05050505, 0x05050505, 0x05050505, 0x05050505,
        0x05050505, 0x00050505, 0x05050500, 0x05050505, 0x05050505, 0x05050505,
        0x05050505, 0x05050505, 0x05050505, 0x05050505, 0x05050505, 0x05050505,
        0x05050505, 0x05050505, 0x00050505, 0x05050500, 0x35353500, 0x35353535,
        0x35353535, 0x35353535, 0x35353535, 0x35353535, 0x35353535, 0x35353535,
        0x35353535, 0x35353535, 0x35353535, 0x35353535, 0x35353535, 0x35353535,
        0x00000000, 0x00000000, 0x35353535, 0x35353535, 0x35353535, 0x35353535,
        0x35353535, 0x35353535, 0x00353535, 0x35000000, 0x35353535, 0x00000035,
        0x00000000, 0x00000000, 0x04040404, 0x04041904, 0x04040404, 0x04040419,
        0x04040404, 0x04040404, 0x19040404, 0x19040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040419, 0x04040404, 0x38040404, 0x38383838, 0x38383838, 0x04043838,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040438, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04041904, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x89898989, 0x89898989, 0x89898989, 0x89008989, 0x89898989, 0x89898989,
        0x89898989, 0x89898989, 0x89898989, 0x89898989, 0x89898989, 0x89898989,
        0x89898989, 0x89898989, 0x89898989, 0x89898989, 0x89898989, 0x89898989,
        0x00898989, 0x89898900, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x94949494, 0x94949494, 0x94949494, 0x94949494,
        0x94949494, 0x94949494, 0x94949494, 0x94949494, 0x94949494, 0x94949494,
        0x94949494, 0x94949494, 0x00009494, 0x00000000, 0x00000000, 0x00000000,
        0x64646464, 0x64646464, 0x64646464, 0x64646464, 0x64646464, 0x64646464,
        0x64646464, 0x64646464, 0x64646464, 0x64646464, 0x64646464, 0x64646464,
        0x64646464, 0x64646464, 0x00646464, 0x64646400, 0x7d7d7d7d, 0x7d7d7d7d,
        0x7d7d7d7d, 0x7d7d7d7d, 0x7d7d7d7d, 0x7d7d7d7d, 0x7d7d7d7d, 0x7d7d7d7d,
        0x7d7d7d7d, 0x7d7d7d7d, 0x7d7d7d7d, 0x00007d7d, 0x7d7d7d7d, 0x7d7d7d7d,
        0x7d7d7d7d, 0x007d7d7d, 0x51515151, 0x51515151, 0x51515151, 0x51515151,
        0x51515151, 0x51515151, 0x51515151, 0x00510000, 0x89898989, 0x89898989,
        0x00898989, 0x00000000, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x00040404, 0x00000404, 0x00000000,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04190404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x20202020, 0x20202020, 0x20202020, 0x20202020,
        0x20202020, 0x20202020, 0x20202020, 0x20202020, 0x20202020, 0x20202020,
        0x20202020, 0x20202020, 0x20202020, 0x20202020, 0x20202020, 0x20202020,
        0x20202020, 0x20202020, 0x20202020, 0x20202020, 0x38383820, 0x20202038,
        0x20202020, 0x20202020, 0x20202020, 0x20201919, 0x20202020, 0x20202020,
        0x20202020, 0x20202020, 0x20202020, 0x20202020, 0x0b0b0b0b, 0x0b0b0b00,
        0x0b0b0b0b, 0x0b00000b, 0x0b00000b, 0x0b0b0b0b, 0x0b0b0b0b, 0x0b0b0b0b,
        0x0b0b0b0b, 0x0b0b0b0b, 0x0b0b000b, 0x0b0b0b0b, 0x000b000b, 0x0b0b0000,
        0x00000b0b, 0x0b0b0b0b, 0x0b0b0b0b, 0x0b00000b, 0x0b00000b, 0x000b0b0b,
        0x00000000, 0x0b000000, 0x00000000, 0x0b000b0b, 0x0b0b0b0b, 0x0b0b0000,
        0x0b0b0b0b, 0x0b0b0b0b, 0x0b0b0b0b, 0x0b0b0b0b, 0x0b0b0b0b, 0x000b0b0b,
        0x2f2f2f00, 0x2f2f2f00, 0x002f2f2f, 0x2f000000, 0x2f00002f, 0x2f2f2f2f,
        0x2f2f2f2f, 0x2f2f2f2f, 0x2f2f2f2f, 0x2f2f2f2f, 0x2f2f002f, 0x2f2f2f2f,
        0x2f2f002f, 0x002f2f00, 0x00002f2f, 0x2f2f002f, 0x002f2f2f, 0x2f000000,
        0x2f00002f, 0x00002f2f, 0x00002f00, 0x00000000, 0x2f2f2f00, 0x002f002f,
        0x00000000, 0x2f2f0000, 0x2f2f2f2f, 0x2f2f2f2f, 0x2f2f2f2f, 0x002f2f2f,
        0x00000000, 0x00000000, 0x2d2d2d00, 0x2d2d2d00, 0x2d2d2d2d, 0x2d002d2d,
        0x2d002d2d, 0x2d2d2d2d, 0x2d2d2d2d, 0x2d2d2d2d, 0x2d2d2d2d, 0x2d2d2d2d,
        0x2d2d002d, 0x2d2d2d2d, 0x2d2d002d, 0x2d2d2d00, 0x00002d2d, 0x2d2d2d2d,
        0x2d2d2d2d, 0x2d002d2d, 0x2d002d2d, 0x00002d2d, 0x0000002d, 0x00000000,
        0x00000000, 0x00000000, 0x2d2d2d2d, 0x2d2d0000, 0x2d2d2d2d, 0x2d2d2d2d,
        0x00002d2d, 0x00000000, 0x2d2d2d00, 0x2d2d2d2d, 0x72727200, 0x72727200,
        0x72727272, 0x72000072, 0x72000072, 0x72727272, 0x72727272, 0x72727272,
        0x72727272, 0x72727272, 0x72720072, 0x72727272, 0x72720072, 0x72727200,
        0x00007272, 0x72727272, 0x72727272, 0x72000072, 0x72000072, 0x00007272,
        0x00000000, 0x72727200, 0x00000000, 0x72007272, 0x72727272, 0x72720000,
        0x72727272, 0x72727272, 0x72727272, 0x72727272, 0x00000000, 0x00000000,
        0x90900000, 0x90909000, 0x00909090, 0x90900000, 0x90900090, 0x00009090,
        0x00909000, 0x90900090, 0x90000000, 0x00000090, 0x00909090, 0x90900000,
        0x90909090, 0x90909090, 0x00009090, 0x90900000, 0x00909090, 0x90900000,
        0x90900090, 0x00009090, 0x00000090, 0x90000000, 0x00000000, 0x00000000,
        0x00000000, 0x90900000, 0x90909090, 0x90909090, 0x90909090, 0x90909090,
        0x00909090, 0x00000000, 0x93939393, 0x93939393, 0x93939393, 0x93930093,
        0x93930093, 0x93939393, 0x93939393, 0x93939393, 0x93939393, 0x93939393,
        0x93930093, 0x93939393, 0x93939393, 0x93939393, 0x00009393, 0x93939393,
        0x93939393, 0x93930093, 0x93930093, 0x00009393, 0x00000000, 0x00939300,
        0x00939393, 0x00009300, 0x93939393, 0x93930000, 0x93939393, 0x93939393,
        0x00000000, 0x93000000, 0x93939393, 0x93939393, 0x3d3d3d3d, 0x3d3d3d3d,
        0x3d3d3d3d, 0x3d3d003d, 0x3d3d003d, 0x3d3d3d3d, 0x3d3d3d3d, 0x3d3d3d3d,
        0x3d3d3d3d, 0x3d3d3d3d, 0x3d3d003d, 0x3d3d3d3d, 0x3d3d3d3d, 0x3d3d3d00,
        0x00003d3d, 0x3d3d3d3d, 0x3d3d3d3d, 0x3d3d003d, 0x3d3d003d, 0x00003d3d,
        0x00000000, 0x003d3d00, 0x00000000, 0x003d3d00, 0x3d3d3d3d, 0x3d3d0000,
        0x3d3d3d3d, 0x3d3d3d3d, 0x003d3d00, 0x00000000, 0x00000000, 0x00000000,
        0x50505050, 0x50505050, 0x50505050, 0x50500050, 0x50500050, 0x50505050,
        0x50505050, 0x50505050, 0x50505050, 0x50505050, 0x50505050, 0x50505050,
        0x50505050, 0x50505050, 0x50505050, 0x50505050, 0x50505050, 0x50500050,
        0x50500050, 0x50505050, 0x00000000, 0x50505050, 0x50505050, 0x50505050,
        0x50505050, 0x50500000, 0x50505050, 0x50505050, 0x50505050, 0x50505050,
        0x50505050, 0x50505050, 0x83838300, 0x83838300, 0x83838383, 0x83838383,
        0x83838383, 0x00838383, 0x83830000, 0x83838383, 0x83838383, 0x83838383,
        0x83838383, 0x83838383, 0x83008383, 0x83838383, 0x83838383, 0x00008300,
        0x83838383, 0x00838383, 0x00830000, 0x83000000, 0x83838383, 0x00830083,
        0x83838383, 0x83838383, 0x00000000, 0x83830000, 0x83838383, 0x83838383,
        0x83830000, 0x00000083, 0x00000000, 0x00000000, 0x95959500, 0x95959595,
        0x95959595, 0x95959595, 0x95959595, 0x95959595, 0x95959595, 0x95959595,
        0x95959595, 0x95959595, 0x95959595, 0x95959595, 0x95959595, 0x95959595,
        0x00959595, 0x19000000, 0x95959595, 0x95959595, 0x95959595, 0x95959595,
        0x95959595, 0x95959595, 0x95959595, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00454500, 0x45450045, 0x00454545, 0x45454545, 0x45454545, 0x45454545,
        0x45454545, 0x45454545, 0x45454545, 0x45004500, 0x45454545, 0x45454545,
        0x45454545, 0x45454545, 0x45454545, 0x00004545, 0x45454545, 0x00450045,
        0x45454545, 0x00004545, 0x45454545, 0x45454545, 0x00004545, 0x45454545,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x96969696, 0x96969696, 0x96969696, 0x96969696,
        0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969696,
        0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969696,
        0x96969696, 0x96969696, 0x96969600, 0x96969696, 0x96969696, 0x96969696,
        0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x00000096,
        0x96969600, 0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969696,
        0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969600, 0x96969696,
        0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969696, 0x96969696,
        0x96969696, 0x96960096, 0x96969696, 0x96969696, 0x96969696, 0x96960096,
        0x96969696, 0x19191996, 0x00969619, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x28282828, 0x28282828,
        0x28282828, 0x28282828, 0x28282828, 0x28282828, 0x28282828, 0x28282828,
        0x28282828, 0x28002828, 0x00000000, 0x00002800, 0x28282828, 0x28282828,
        0x28282828, 0x28282828, 0x28282828, 0x28282828, 0x28282828, 0x28282828,
        0x28282828, 0x28282828, 0x19282828, 0x28282828, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27270027, 0x00002727, 0x27272727, 0x00272727, 0x27270027, 0x00002727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27270027, 0x00002727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27270027, 0x00002727, 0x27272727, 0x00272727,
        0x27270027, 0x00002727, 0x27272727, 0x27272727, 0x27272727, 0x00272727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27270027, 0x00002727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x00272727, 0x27272700, 0x27272727, 0x27272727,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x00000027,
        0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x00002727, 0x00000000, 0x17171717, 0x17171717, 0x17171717, 0x17171717,
        0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717,
        0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717,
        0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x00001717,
        0x17171717, 0x00001717, 0x12121212, 0x12121212, 0x12121212, 0x12121212,
        0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212,
        0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212,
        0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212,
        0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212,
        0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x67676767, 0x67676767,
        0x67676767, 0x67676767, 0x67676767, 0x67676767, 0x67676767, 0x00000067,
        0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c,
        0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c,
        0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c, 0x7c7c7c7c,
        0x197c7c7c, 0x7c7c1919, 0x7c7c7c7c, 0x7c7c7c7c, 0x0000007c, 0x00000000,
        0x8a8a8a8a, 0x8a8a8a8a, 0x8a8a8a8a, 0x8a8a8a8a, 0x8a8a8a8a, 0x00008a8a,
        0x00000000, 0x8a000000, 0x33333333, 0x33333333, 0x33333333, 0x33333333,
        0x33333333, 0x00191933, 0x00000000, 0x00000000, 0x11111111, 0x11111111,
        0x11111111, 0x11111111, 0x11111111, 0x00000000, 0x00000000, 0x00000000,
        0x8b8b8b8b, 0x8b8b8b8b, 0x8b8b8b8b, 0x8b8b008b, 0x8b8b008b, 0x00000000,
        0x00000000, 0x00000000, 0x42424242, 0x42424242, 0x42424242, 0x42424242,
        0x42424242, 0x42424242, 0x42424242, 0x42424242, 0x42424242, 0x42424242,
        0x42424242, 0x42424242, 0x42424242, 0x42424242, 0x42424242, 0x42424242,
        0x42424242, 0x42424242, 0x42424242, 0x42424242, 0x42424242, 0x42424242,
        0x42424242, 0x00004242, 0x42424242, 0x42424242, 0x00004242, 0x00000000,
        0x42424242, 0x42424242, 0x00004242, 0x00000000, 0x19195c5c, 0x5c5c195c,
        0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x00005c5c, 0x00000000,
        0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c,
        0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c,
        0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c,
        0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x0000005c, 0x00000000,
        0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c,
        0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x5c5c5c5c, 0x005c5c5c, 0x00000000,
        0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212,
        0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212,
        0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x12121212, 0x00001212,
        0x00000000, 0x00000000, 0x48484848, 0x48484848, 0x48484848, 0x48484848,
        0x48484848, 0x48484848, 0x48484848, 0x00484848, 0x48484848, 0x48484848,
        0x48484848, 0x00000000, 0x48484848, 0x48484848, 0x48484848, 0x00000000,
        0x00000048, 0x48484848, 0x48484848, 0x48484848, 0x8c8c8c8c, 0x8c8c8c8c,
        0x8c8c8c8c, 0x8c8c8c8c, 0x8c8c8c8c, 0x8c8c8c8c, 0x8c8c8c8c, 0x00008c8c,
        0x8c8c8c8c, 0x0000008c, 0x00000000, 0x00000000, 0x62626262, 0x62626262,
        0x62626262, 0x62626262, 0x62626262, 0x62626262, 0x62626262, 0x62626262,
        0x62626262, 0x62626262, 0x62626262, 0x00000000, 0x62626262, 0x62626262,
        0x62626262, 0x62626262, 0x62626262, 0x62626262, 0x00006262, 0x00000000,
        0x62626262, 0x62626262, 0x00626262, 0x62620000, 0x42424242, 0x42424242,
        0x42424242, 0x42424242, 0x42424242, 0x42424242, 0x42424242, 0x42424242,
        0x10101010, 0x10101010, 0x10101010, 0x10101010, 0x10101010, 0x10101010,
        0x10101010, 0x10100000, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d,
        0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d,
        0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x008d8d8d,
        0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d, 0x8d8d8d8d,
        0x8d8d8d8d, 0x8d00008d, 0x8d8d8d8d, 0x8d8d8d8d, 0x00008d8d, 0x00000000,
        0x8d8d8d8d, 0x8d8d8d8d, 0x00008d8d, 0x00000000, 0x8d8d8d8d, 0x8d8d8d8d,
        0x8d8d8d8d, 0x00008d8d, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x00383838, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x07070707, 0x07070707,
        0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x07070707,
        0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x07070707,
        0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x00000007,
        0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x07070707,
        0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x07070707, 0x00070707,
        0x87878787, 0x87878787, 0x87878787, 0x87878787, 0x87878787, 0x87878787,
        0x87878787, 0x87878787, 0x87878787, 0x87878787, 0x87878787, 0x87878787,
        0x87878787, 0x87878787, 0x87878787, 0x87878787, 0x0a0a0a0a, 0x0a0a0a0a,
        0x0a0a0a0a, 0x0a0a0a0a, 0x0a0a0a0a, 0x0a0a0a0a, 0x0a0a0a0a, 0x0a0a0a0a,
        0x0a0a0a0a, 0x0a0a0a0a, 0x0a0a0a0a, 0x0a0a0a0a, 0x0a0a0a0a, 0x00000000,
        0x00000000, 0x0a0a0a0a, 0x47474747, 0x47474747, 0x47474747, 0x47474747,
        0x47474747, 0x47474747, 0x47474747, 0x47474747, 0x47474747, 0x47474747,
        0x47474747, 0x47474747, 0x47474747, 0x47474747, 0x47000000, 0x47474747,
        0x47474747, 0x47474747, 0x00004747, 0x47474700, 0x68686868, 0x68686868,
        0x68686868, 0x68686868, 0x68686868, 0x68686868, 0x68686868, 0x68686868,
        0x68686868, 0x68686868, 0x68686868, 0x68686868, 0x1e1e1e1e, 0x1e1e1e1e,
        0x0000001e, 0x00000000, 0x28282828, 0x28282828, 0x28282828, 0x28282828,
        0x28282828, 0x28282828, 0x28282828, 0x28282828, 0x28282828, 0x28282828,
        0x00282828, 0x28282800, 0x87878787, 0x87878787, 0x00000000, 0x00000000,
        0x19383838, 0x38383838, 0x38383838, 0x38383838, 0x38381938, 0x38383838,
        0x19191938, 0x19193819, 0x19191919, 0x19191938, 0x00193838, 0x00000000,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x2c2c4646, 0x1e2c2c2c, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x2c2c2c46,
        0x46462c2c, 0x2c2c4646, 0x462c2c2c, 0x46464646, 0x46464646, 0x46464646,
        0x4646461e, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x2c464646,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x00002c2c, 0x2c2c2c2c, 0x00002c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x00002c2c, 0x2c2c2c2c, 0x00002c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c002c00, 0x2c002c00, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x00002c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c002c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c002c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c0000, 0x2c2c2c2c, 0x2c2c2c00,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c0000, 0x2c2c002c,
        0x2c2c2c2c, 0x002c2c2c, 0x19191919, 0x19191919, 0x19191919, 0x19193838,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19190019, 0x19191919, 0x19191919,
        0x00004619, 0x19191919, 0x19191919, 0x46191919, 0x19191919, 0x19191919,
        0x19191919, 0x00191919, 0x46464646, 0x46464646, 0x46464646, 0x00000046,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x00000019, 0x00000000, 0x00000000, 0x00000000,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x00000038, 0x00000000, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x192c1919, 0x46461919, 0x19191919,
        0x19461919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19461919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x19191946, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x00191919, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x19191919, 0x19191919,
        0x00191919, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f,
        0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f,
        0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f,
        0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f,
        0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f,
        0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x0f0f0f0f, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19190000, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19001919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x29292929, 0x29292929, 0x29292929, 0x29292929,
        0x29292929, 0x29292929, 0x29292929, 0x29292929, 0x29292929, 0x29292929,
        0x29292929, 0x29292929, 0x29292929, 0x29292929, 0x29292929, 0x29292929,
        0x29292929, 0x29292929, 0x29292929, 0x29292929, 0x29292929, 0x29292929,
        0x29292929, 0x29292929, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x1a1a1a1a, 0x1a1a1a1a,
        0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a,
        0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a,
        0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a,
        0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a,
        0x1a1a1a1a, 0x1a1a1a1a, 0x1a1a1a1a, 0x00000000, 0x1a1a1a00, 0x1a1a1a1a,
        0x28282828, 0x28282828, 0x28282828, 0x28282828, 0x28282828, 0x28282828,
        0x28282828, 0x28282828, 0x28282828, 0x28002828, 0x00000000, 0x00002800,
        0x97979797, 0x97979797, 0x97979797, 0x97979797, 0x97979797, 0x97979797,
        0x97979797, 0x97979797, 0x97979797, 0x97979797, 0x97979797, 0x97979797,
        0x97979797, 0x97979797, 0x00000000, 0x97000000, 0x00000097, 0x00000000,
        0x00000000, 0x97000000, 0x27272727, 0x27272727, 0x27272727, 0x27272727,
        0x27272727, 0x00272727, 0x00000000, 0x00000000, 0x27272727, 0x00272727,
        0x27272727, 0x00272727, 0x27272727, 0x00272727, 0x27272727, 0x00272727,
        0x27272727, 0x00272727, 0x27272727, 0x00272727, 0x27272727, 0x00272727,
        0x27272727, 0x00272727, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x00001919, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30003030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x00000000,
        0x00000000, 0x00000000, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x00003030, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x00000000,
        0x19191919, 0x30193019, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x30303019, 0x30303030, 0x38383030, 0x31313838,
        0x19191919, 0x19191919, 0x30303030, 0x19191919, 0x36363600, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x00363636, 0x19383800, 0x36363619, 0x3e3e3e19, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x193e3e3e, 0x3e3e3e19, 0x00000000, 0x0d0d0d00,
        0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d,
        0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d, 0x31313100, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x00313131, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d,
        0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d, 0x0d0d0d0d, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x00000000, 0x00000000, 0x00000000, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x00313131, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x19313131, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x193e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0xa0a0a0a0, 0xa0a0a0a0,
        0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0,
        0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0,
        0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0,
        0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0,
        0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0,
        0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0x000000a0, 0xa0a0a0a0, 0xa0a0a0a0,
        0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0,
        0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0xa0a0a0a0, 0x00a0a0a0,
        0x00000000, 0x00000000, 0x4b4b4b4b, 0x4b4b4b4b, 0x4b4b4b4b, 0x4b4b4b4b,
        0x4b4b4b4b, 0x4b4b4b4b, 0x4b4b4b4b, 0x4b4b4b4b, 0x4b4b4b4b, 0x4b4b4b4b,
        0x4b4b4b4b, 0x4b4b4b4b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b,
        0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b,
        0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b,
        0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b,
        0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b,
        0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b,
        0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b,
        0x9b9b9b9b, 0x9b9b9b9b, 0x9b9b9b9b, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e, 0x1e1e1e1e,
        0x1e1e1e1e, 0x1e1e1e1e, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x46461919, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46191919, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x00464646, 0x00000000,
        0x46004646, 0x46464600, 0x00004646, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x46460000, 0x46464646, 0x46464646, 0x46464646,
        0x88888888, 0x88888888, 0x88888888, 0x88888888, 0x88888888, 0x88888888,
        0x88888888, 0x88888888, 0x88888888, 0x88888888, 0x88888888, 0x00000088,
        0x19191919, 0x19191919, 0x00001919, 0x00000000, 0x78787878, 0x78787878,
        0x78787878, 0x78787878, 0x78787878, 0x78787878, 0x78787878, 0x78787878,
        0x78787878, 0x78787878, 0x78787878, 0x78787878, 0x78787878, 0x78787878,
        0x00000000, 0x00000000, 0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e,
        0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e,
        0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e, 0x7e7e7e7e,
        0x7e7e7e7e, 0x00007e7e, 0x00000000, 0x7e7e0000, 0x7e7e7e7e, 0x7e7e7e7e,
        0x00007e7e, 0x00000000, 0x20202020, 0x20202020, 0x20202020, 0x20202020,
        0x20202020, 0x20202020, 0x20202020, 0x20202020, 0x3f3f3f3f, 0x3f3f3f3f,
        0x3f3f3f3f, 0x3f3f3f3f, 0x3f3f3f3f, 0x3f3f3f3f, 0x3f3f3f3f, 0x3f3f3f3f,
        0x3f3f3f3f, 0x3f3f3f3f, 0x3f3f3f3f, 0x3f193f3f, 0x7b7b7b7b, 0x7b7b7b7b,
        0x7b7b7b7b, 0x7b7b7b7b, 0x7b7b7b7b, 0x7b7b7b7b, 0x7b7b7b7b, 0x7b7b7b7b,
        0x7b7b7b7b, 0x00000000, 0x00000000, 0x7b000000, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x00000031,
        0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b,
        0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b,
        0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x3b3b3b3b,
        0x3b3b3b3b, 0x19003b3b, 0x3b3b3b3b, 0x3b3b3b3b, 0x00003b3b, 0x3b3b0000,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f,
        0x5f5f5f5f, 0x005f5f5f, 0x16161616, 0x16161616, 0x16161616, 0x16161616,
        0x16161616, 0x16161616, 0x16161616, 0x16161616, 0x16161616, 0x16161616,
        0x16161616, 0x16161616, 0x16161616, 0x00161616, 0x00000000, 0x00000000,
        0x16161616, 0x16161616, 0x16161616, 0x00001616, 0x16161616, 0x16161616,
        0x00001616, 0x16161616, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f,
        0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x5f5f5f5f, 0x8e8e8e8e, 0x8e8e8e8e,
        0x8e8e8e8e, 0x8e8e8e8e, 0x8e8e8e8e, 0x8e8e8e8e, 0x8e8e8e8e, 0x8e8e8e8e,
        0x8e8e8e8e, 0x8e8e8e8e, 0x8e8e8e8e, 0x8e8e8e8e, 0x8e8e8e8e, 0x8e8e8e8e,
        0x8e8e8e8e, 0x8e8e8e8e, 0x008e8e8e, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x8e000000, 0x8e8e8e8e, 0x56565656, 0x56565656,
        0x56565656, 0x56565656, 0x56565656, 0x00565656, 0x00000000, 0x00000000,
        0x27272700, 0x00272727, 0x27272700, 0x00272727, 0x27272700, 0x00272727,
        0x00000000, 0x00000000, 0x27272727, 0x00272727, 0x27272727, 0x00272727,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x19464646, 0x46464646,
        0x46464646, 0x46462c46, 0x19194646, 0x00000000, 0x17171717, 0x17171717,
        0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717,
        0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717,
        0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717, 0x17171717,
        0x56565656, 0x56565656, 0x56565656, 0x56565656, 0x56565656, 0x56565656,
        0x56565656, 0x56565656, 0x56565656, 0x56565656, 0x56565656, 0x00005656,
        0x56565656, 0x56565656, 0x00005656, 0x00000000, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x00000000, 0x00000000, 0x00000000, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x00313131, 0x31000000, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x00000000,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x00003030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x00003030, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x46464646, 0x00464646,
        0x00000000, 0x00000000, 0x05000000, 0x05050505, 0x00000000, 0x35353500,
        0x35353535, 0x35353535, 0x35353535, 0x35353535, 0x35353535, 0x00353535,
        0x35353535, 0x00350035, 0x35003535, 0x35350035, 0x35353535, 0x35353535,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x00040404, 0x00000000,
        0x00000000, 0x00000000, 0x04000000, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x19190404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040000, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x00000000, 0x04000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x19191919, 0x19191919, 0x00001919, 0x00000000, 0x38383838, 0x38383838,
        0x38383838, 0x1e1e3838, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x00191919, 0x19191919, 0x00000000,
        0x04040404, 0x04040004, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x19000004,
        0x19191900, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x46464619, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x19464646, 0x19191919, 0x46464619, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x19464646, 0x19191919,
        0x19191919, 0x3e3e1919, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e19, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e,
        0x3e3e3e3e, 0x3e3e3e3e, 0x3e3e3e3e, 0x19193e3e, 0x31313131, 0x31313131,
        0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x31313131, 0x00313131,
        0x31310000, 0x31313131, 0x31310000, 0x31313131, 0x31310000, 0x31313131,
        0x31310000, 0x00000031, 0x19191919, 0x00191919, 0x19191919, 0x00191919,
        0x00000000, 0x00000000, 0x19191900, 0x00001919, 0x4a4a4a4a, 0x4a4a4a4a,
        0x4a4a4a4a, 0x4a4a4a00, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a,
        0x4a4a4a4a, 0x004a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a,
        0x004a4a4a, 0x4a004a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x00004a4a,
        0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x00004a4a, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a,
        0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a,
        0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a,
        0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a,
        0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a, 0x4a4a4a4a,
        0x004a4a4a, 0x00000000, 0x00191919, 0x19000000, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19000000, 0x19191919, 0x19191919,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x002c2c2c, 0x19191919, 0x19191919, 0x19191919, 0x00000019,
        0x0000002c, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00003819,
        0x4c4c4c4c, 0x4c4c4c4c, 0x4c4c4c4c, 0x4c4c4c4c, 0x4c4c4c4c, 0x4c4c4c4c,
        0x4c4c4c4c, 0x0000004c, 0x13131313, 0x13131313, 0x13131313, 0x13131313,
        0x13131313, 0x13131313, 0x13131313, 0x13131313, 0x13131313, 0x13131313,
        0x13131313, 0x13131313, 0x00000013, 0x00000000, 0x00000000, 0x00000000,
        0x19191938, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x00000000, 0x6a6a6a6a, 0x6a6a6a6a, 0x6a6a6a6a, 0x6a6a6a6a,
        0x6a6a6a6a, 0x6a6a6a6a, 0x6a6a6a6a, 0x6a6a6a6a, 0x6a6a6a6a, 0x00000000,
        0x00000000, 0x6a6a6a00, 0x2a2a2a2a, 0x2a2a2a2a, 0x2a2a2a2a, 0x2a2a2a2a,
        0x2a2a2a2a, 0x2a2a2a2a, 0x002a2a2a, 0x00000000, 0x6c6c6c6c, 0x6c6c6c6c,
        0x6c6c6c6c, 0x6c6c6c6c, 0x6c6c6c6c, 0x6c6c6c6c, 0x6c6c6c6c, 0x6c6c6c6c,
        0x6c6c6c6c, 0x6c6c6c6c, 0x006c6c6c, 0x00000000, 0x9a9a9a9a, 0x9a9a9a9a,
        0x9a9a9a9a, 0x9a9a9a9a, 0x9a9a9a9a, 0x9a9a9a9a, 0x9a9a9a9a, 0x9a009a9a,
        0x6d6d6d6d, 0x6d6d6d6d, 0x6d6d6d6d, 0x6d6d6d6d, 0x6d6d6d6d, 0x6d6d6d6d,
        0x6d6d6d6d, 0x6d6d6d6d, 0x6d6d6d6d, 0x00000000, 0x6d6d6d6d, 0x6d6d6d6d,
        0x6d6d6d6d, 0x00006d6d, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f,
        0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f,
        0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f, 0x1f1f1f1f,
        0x1f1f1f1f, 0x1f1f1f1f, 0x80808080, 0x80808080, 0x80808080, 0x80808080,
        0x80808080, 0x80808080, 0x80808080, 0x80808080, 0x80808080, 0x80808080,
        0x80808080, 0x80808080, 0x74747474, 0x74747474, 0x74747474, 0x74747474,
        0x74747474, 0x74747474, 0x74747474, 0x00007474, 0x74747474, 0x74747474,
        0x00007474, 0x00000000, 0x73737373, 0x73737373, 0x73737373, 0x73737373,
        0x73737373, 0x73737373, 0x73737373, 0x73737373, 0x73737373, 0x00000000,
        0x73737373, 0x73737373, 0x73737373, 0x73737373, 0x73737373, 0x73737373,
        0x73737373, 0x73737373, 0x73737373, 0x00000000, 0x25252525, 0x25252525,
        0x25252525, 0x25252525, 0x25252525, 0x25252525, 0x25252525, 0x25252525,
        0x25252525, 0x25252525, 0x00000000, 0x00000000, 0x14141414, 0x14141414,
        0x14141414, 0x14141414, 0x14141414, 0x14141414, 0x14141414, 0x14141414,
        0x14141414, 0x14141414, 0x14141414, 0x14141414, 0x14141414, 0x00000000,
        0x00000000, 0x14000000, 0x9c9c9c9c, 0x9c9c9c9c, 0x009c9c9c, 0x9c9c9c9c,
        0x9c9c9c9c, 0x9c9c9c9c, 0x009c9c9c, 0x9c9c9c9c, 0x009c9c9c, 0x9c009c9c,
        0x9c9c9c9c, 0x9c9c9c9c, 0x9c009c9c, 0x9c9c9c9c, 0x9c9c9c9c, 0x9c9c9c9c,
        0x9c009c9c, 0x9c9c9c9c, 0x9c009c9c, 0x0000009c, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x49494949, 0x49494949, 0x49494949, 0x49494949,
        0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949,
        0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949,
        0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949,
        0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949,
        0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949,
        0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949,
        0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x49494949, 0x00494949,
        0x00000000, 0x00000000, 0x49494949, 0x49494949, 0x49494949, 0x49494949,
        0x49494949, 0x00004949, 0x00000000, 0x00000000, 0x49494949, 0x49494949,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x46464646, 0x46004646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46460046, 0x46464646, 0x00464646, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x1c1c1c1c, 0x00001c1c, 0x1c1c001c, 0x1c1c1c1c,
        0x1c1c1c1c, 0x1c1c1c1c, 0x1c1c1c1c, 0x1c1c1c1c, 0x1c1c1c1c, 0x1c1c1c1c,
        0x1c1c1c1c, 0x1c1c1c1c, 0x1c1c1c1c, 0x1c001c1c, 0x0000001c, 0x1c00001c,
        0x37373737, 0x37373737, 0x37373737, 0x37373737, 0x37373737, 0x37003737,
        0x37373737, 0x37373737, 0x76767676, 0x76767676, 0x76767676, 0x76767676,
        0x76767676, 0x76767676, 0x76767676, 0x76767676, 0x60606060, 0x60606060,
        0x60606060, 0x60606060, 0x60606060, 0x60606060, 0x60606060, 0x00606060,
        0x00000000, 0x60000000, 0x60606060, 0x60606060, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x34343434, 0x34343434,
        0x34343434, 0x34343434, 0x00343434, 0x00003434, 0x34000000, 0x34343434,
        0x79797979, 0x79797979, 0x79797979, 0x79797979, 0x79797979, 0x79797979,
        0x79797979, 0x79000000, 0x4d4d4d4d, 0x4d4d4d4d, 0x4d4d4d4d, 0x4d4d4d4d,
        0x4d4d4d4d, 0x4d4d4d4d, 0x00004d4d, 0x4d000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x59595959, 0x59595959, 0x59595959, 0x59595959,
        0x59595959, 0x59595959, 0x59595959, 0x59595959, 0x58585858, 0x58585858,
        0x58585858, 0x58585858, 0x58585858, 0x58585858, 0x00000000, 0x58585858,
        0x58585858, 0x58585858, 0x58585858, 0x58585858, 0x58580000, 0x58585858,
        0x58585858, 0x58585858, 0x58585858, 0x58585858, 0x58585858, 0x58585858,
        0x58585858, 0x58585858, 0x58585858, 0x58585858, 0x40404040, 0x00404000,
        0x00000000, 0x40404040, 0x40404040, 0x40404000, 0x40404000, 0x40404040,
        0x40404040, 0x40404040, 0x40404040, 0x40404040, 0x40404040, 0x00004040,
        0x00404040, 0x40000000, 0x40404040, 0x40404040, 0x00000040, 0x00000000,
        0x40404040, 0x40404040, 0x00000040, 0x00000000, 0x6f6f6f6f, 0x6f6f6f6f,
        0x6f6f6f6f, 0x6f6f6f6f, 0x6f6f6f6f, 0x6f6f6f6f, 0x6f6f6f6f, 0x6f6f6f6f,
        0x6b6b6b6b, 0x6b6b6b6b, 0x6b6b6b6b, 0x6b6b6b6b, 0x6b6b6b6b, 0x6b6b6b6b,
        0x6b6b6b6b, 0x6b6b6b6b, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x52525252, 0x52525252,
        0x52525252, 0x52525252, 0x52525252, 0x52525252, 0x52525252, 0x52525252,
        0x52525252, 0x00525252, 0x52000000, 0x52525252, 0x52525252, 0x00525252,
        0x00000000, 0x00000000, 0x06060606, 0x06060606, 0x06060606, 0x06060606,
        0x06060606, 0x06060606, 0x06060606, 0x06060606, 0x06060606, 0x06060606,
        0x06060606, 0x06060606, 0x06060606, 0x00000606, 0x06060600, 0x06060606,
        0x3a3a3a3a, 0x3a3a3a3a, 0x3a3a3a3a, 0x3a3a3a3a, 0x3a3a3a3a, 0x00003a3a,
        0x3a3a3a3a, 0x3a3a3a3a, 0x39393939, 0x39393939, 0x39393939, 0x39393939,
        0x00393939, 0x00000000, 0x39393939, 0x39393939, 0x7a7a7a7a, 0x7a7a7a7a,
        0x7a7a7a7a, 0x7a7a7a7a, 0x00007a7a, 0x00000000, 0x7a7a7a00, 0x0000007a,
        0x00000000, 0x00000000, 0x7a7a7a00, 0x7a7a7a7a, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x70707070, 0x70707070, 0x70707070, 0x70707070, 0x70707070, 0x70707070,
        0x70707070, 0x70707070, 0x70707070, 0x70707070, 0x70707070, 0x70707070,
        0x70707070, 0x70707070, 0x70707070, 0x70707070, 0x70707070, 0x70707070,
        0x00000070, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x69696969, 0x69696969, 0x69696969, 0x69696969,
        0x69696969, 0x69696969, 0x69696969, 0x69696969, 0x69696969, 0x69696969,
        0x69696969, 0x69696969, 0x00696969, 0x00000000, 0x00000000, 0x00000000,
        0x69696969, 0x69696969, 0x69696969, 0x69696969, 0x69696969, 0x69696969,
        0x69696969, 0x69696969, 0x69696969, 0x69696969, 0x69696969, 0x69696969,
        0x00696969, 0x00000000, 0x69690000, 0x69696969, 0x32323232, 0x32323232,
        0x32323232, 0x32323232, 0x32323232, 0x32323232, 0x32323232, 0x32323232,
        0x32323232, 0x32323232, 0x00000000, 0x00000000, 0x32323232, 0x32323232,
        0x00003232, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x00040404, 0x9f9f9f9f, 0x9f9f9f9f, 0x9f9f9f9f, 0x9f9f9f9f,
        0x9f9f9f9f, 0x9f9f9f9f, 0x9f9f9f9f, 0x9f9f9f9f, 0x9f9f9f9f, 0x9f9f9f9f,
        0x9f009f9f, 0x00009f9f, 0x00009f9f, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x6e6e6e6e, 0x6e6e6e6e,
        0x6e6e6e6e, 0x6e6e6e6e, 0x6e6e6e6e, 0x6e6e6e6e, 0x6e6e6e6e, 0x6e6e6e6e,
        0x6e6e6e6e, 0x6e6e6e6e, 0x00000000, 0x00000000, 0x84848484, 0x84848484,
        0x84848484, 0x84848484, 0x84848484, 0x84848484, 0x84848484, 0x84848484,
        0x84848484, 0x84848484, 0x00008484, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x71717171, 0x71717171, 0x71717171, 0x71717171,
        0x71717171, 0x71717171, 0x00007171, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x18181818, 0x18181818, 0x18181818, 0x18181818, 0x18181818, 0x18181818,
        0x18181818, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x26262626, 0x26262626, 0x26262626, 0x26262626, 0x26262626, 0x00262626,
        0x00000000, 0x00000000, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e,
        0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e,
        0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e,
        0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x00000e0e, 0x0e0e0000, 0x0e0e0e0e,
        0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e, 0x0e0e0e0e,
        0x0e0e0e0e, 0x00000e0e, 0x00000000, 0x0e000000, 0x3c3c3c3c, 0x3c3c3c3c,
        0x3c3c3c3c, 0x3c3c3c3c, 0x3c3c3c3c, 0x3c3c3c3c, 0x3c3c3c3c, 0x3c3c3c3c,
        0x3c3c3c3c, 0x3c3c3c3c, 0x3c3c3c3c, 0x3c3c3c3c, 0x3c3c3c3c, 0x3c3c3c3c,
        0x3c3c3c3c, 0x3c3c3c3c, 0x003c3c3c, 0x00000000, 0x00000000, 0x00003c00,
        0x85858585, 0x85858585, 0x85858585, 0x85858585, 0x85858585, 0x85858585,
        0x00000085, 0x00000000, 0x85858585, 0x85858585, 0x00008585, 0x00000000,
        0x15151515, 0x15151515, 0x15151515, 0x15151515, 0x15151515, 0x15151515,
        0x15151515, 0x15151515, 0x15151515, 0x15151515, 0x15151515, 0x15151515,
        0x15151515, 0x15150015, 0x15151515, 0x15151515, 0x15151515, 0x15151515,
        0x00000000, 0x00000000, 0x4e4e4e4e, 0x4e4e4e4e, 0x4e4e4e4e, 0x4e4e4e4e,
        0x4e4e4e4e, 0x4e4e4e4e, 0x4e4e4e4e, 0x4e4e4e4e, 0x4e4e4e4e, 0x004e4e4e,
        0x00000000, 0x00000000, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f,
        0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f,
        0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f,
        0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f, 0x7f7f7f7f,
        0x7f7f7f7f, 0x7f7f7f7f, 0x83838300, 0x83838383, 0x83838383, 0x83838383,
        0x83838383, 0x00000083, 0x00000000, 0x00000000, 0x43434343, 0x43434343,
        0x43434343, 0x43434343, 0x43004343, 0x43434343, 0x43434343, 0x43434343,
        0x43434343, 0x43434343, 0x43434343, 0x43434343, 0x43434343, 0x43434343,
        0x43434343, 0x00434343, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x5e5e5e5e, 0x005e5e5e, 0x5e5e005e, 0x5e005e5e, 0x5e5e5e5e, 0x5e5e5e5e,
        0x5e5e5e5e, 0x5e005e5e, 0x5e5e5e5e, 0x5e5e5e5e, 0x00005e5e, 0x00000000,
        0x44444444, 0x44444444, 0x44444444, 0x44444444, 0x44444444, 0x44444444,
        0x44444444, 0x44444444, 0x44444444, 0x44444444, 0x44444444, 0x44444444,
        0x44444444, 0x44444444, 0x00444444, 0x00000000, 0x44444444, 0x44444444,
        0x00004444, 0x00000000, 0x2b2b2b2b, 0x2b2b2b00, 0x2b2b2b2b, 0x2b00002b,
        0x2b00002b, 0x2b2b2b2b, 0x2b2b2b2b, 0x2b2b2b2b, 0x2b2b2b2b, 0x2b2b2b2b,
        0x2b2b002b, 0x2b2b2b2b, 0x2b2b002b, 0x2b2b2b00, 0x38002b2b, 0x2b2b2b2b,
        0x2b2b2b2b, 0x2b00002b, 0x2b00002b, 0x00002b2b, 0x0000002b, 0x2b000000,
        0x00000000, 0x2b2b2b00, 0x2b2b2b2b, 0x2b2b0000, 0x2b2b2b2b, 0x0000002b,
        0x2b2b2b2b, 0x0000002b, 0x00000000, 0x00000000, 0x63636363, 0x63636363,
        0x63636363, 0x63636363, 0x63636363, 0x63636363, 0x63636363, 0x63636363,
        0x63636363, 0x63636363, 0x63636363, 0x63636363, 0x63636363, 0x63636363,
        0x63636363, 0x63636363, 0x63636363, 0x63636363, 0x63636363, 0x63636363,
        0x63636363, 0x63636363, 0x63636363, 0x63636300, 0x00006363, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x98989898, 0x98989898, 0x98989898, 0x98989898, 0x98989898, 0x98989898,
        0x98989898, 0x98989898, 0x98989898, 0x98989898, 0x98989898, 0x98989898,
        0x98989898, 0x98989898, 0x98989898, 0x98989898, 0x98989898, 0x98989898,
        0x00000000, 0x00000000, 0x98989898, 0x98989898, 0x00009898, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x81818181, 0x81818181, 0x81818181, 0x81818181,
        0x81818181, 0x81818181, 0x81818181, 0x81818181, 0x81818181, 0x81818181,
        0x81818181, 0x81818181, 0x81818181, 0x00008181, 0x81818181, 0x81818181,
        0x81818181, 0x81818181, 0x81818181, 0x81818181, 0x81818181, 0x81818181,
        0x81818181, 0x00008181, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x5b5b5b5b, 0x5b5b5b5b,
        0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b,
        0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b,
        0x5b5b5b5b, 0x5b5b5b5b, 0x5b5b5b5b, 0x0000005b, 0x00000000, 0x00000000,
        0x5b5b5b5b, 0x5b5b5b5b, 0x00005b5b, 0x00000000, 0x5c5c5c5c, 0x5c5c5c5c,
        0x5c5c5c5c, 0x0000005c, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x8f8f8f8f, 0x8f8f8f8f, 0x8f8f8f8f, 0x8f8f8f8f, 0x8f8f8f8f, 0x8f8f8f8f,
        0x8f8f8f8f, 0x8f8f8f8f, 0x8f8f8f8f, 0x8f8f8f8f, 0x8f8f8f8f, 0x8f8f8f8f,
        0x8f8f8f8f, 0x8f8f8f8f, 0x00008f8f, 0x00000000, 0x8f8f8f8f, 0x8f8f8f8f,
        0x00008f8f, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x02020202, 0x02020202, 0x02020202, 0x02020202,
        0x02020202, 0x02020202, 0x00020202, 0x02020200, 0x02020202, 0x02020202,
        0x02020202, 0x00000000, 0x02020202, 0x02020202, 0x02020202, 0x02020202,
        0x02020202, 0x00020202, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x22222222, 0x22222222,
        0x22222222, 0x22222222, 0x22222222, 0x22222222, 0x22222222, 0x22222222,
        0x22222222, 0x22222222, 0x22222222, 0x22222222, 0x22222222, 0x22222222,
        0x22222222, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e,
        0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e,
        0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e,
        0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x9e9e9e9e, 0x009e9e9e, 0x00000000,
        0x00000000, 0x9e000000, 0x21212121, 0x00212121, 0x00002100, 0x21212121,
        0x21212121, 0x00212100, 0x21212121, 0x21212121, 0x21212121, 0x21212121,
        0x21212121, 0x21212121, 0x21212121, 0x21002121, 0x21000021, 0x21212121,
        0x21212121, 0x00212121, 0x00000000, 0x00000000, 0x21212121, 0x21212121,
        0x00002121, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x61616161, 0x61616161, 0x61610000, 0x61616161, 0x61616161, 0x61616161,
        0x61616161, 0x61616161, 0x61616161, 0x61616161, 0x61616161, 0x61616161,
        0x61616161, 0x61616161, 0x61610000, 0x61616161, 0x61616161, 0x00000061,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1,
        0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1,
        0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1, 0xa1a1a1a1,
        0x00000000, 0x00000000, 0x86868686, 0x86868686, 0x86868686, 0x86868686,
        0x86868686, 0x86868686, 0x86868686, 0x86868686, 0x86868686, 0x86868686,
        0x86868686, 0x86868686, 0x86868686, 0x86868686, 0x86868686, 0x86868686,
        0x86868686, 0x86868686, 0x86868686, 0x86868686, 0x00868686, 0x00000000,
        0x00000000, 0x00000000, 0x12121212, 0x12121212, 0x12121212, 0x12121212,
        0x77777777, 0x77777777, 0x77777777, 0x77777777, 0x77777777, 0x77777777,
        0x77777777, 0x77777777, 0x77777777, 0x77777777, 0x77777777, 0x77777777,
        0x77777777, 0x77777777, 0x00000077, 0x00000000, 0x0c0c0c0c, 0x0c0c0c0c,
        0x0c0c000c, 0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c,
        0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x000c0c0c,
        0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x00000c0c, 0x00000000, 0x00000000,
        0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c, 0x0c0c0c0c,
        0x0c0c0c0c, 0x0000000c, 0x53535353, 0x53535353, 0x53535353, 0x53535353,
        0x53535353, 0x53535353, 0x53535353, 0x53535353, 0x53530000, 0x53535353,
        0x53535353, 0x53535353, 0x53535353, 0x53535353, 0x53535300, 0x53535353,
        0x53535353, 0x00535353, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x54545454, 0x00545454, 0x54005454, 0x54545454,
        0x54545454, 0x54545454, 0x54545454, 0x54545454, 0x54545454, 0x54545454,
        0x54545454, 0x54545454, 0x54545454, 0x00545454, 0x00540000, 0x54005454,
        0x54545454, 0x54545454, 0x00000000, 0x00000000, 0x54545454, 0x54545454,
        0x00005454, 0x00000000, 0x2e2e2e2e, 0x2e002e2e, 0x2e2e002e, 0x2e2e2e2e,
        0x2e2e2e2e, 0x2e2e2e2e, 0x2e2e2e2e, 0x2e2e2e2e, 0x2e2e2e2e, 0x2e2e2e2e,
        0x2e2e2e2e, 0x002e2e2e, 0x2e002e2e, 0x2e2e2e2e, 0x0000002e, 0x00000000,
        0x2e2e2e2e, 0x2e2e2e2e, 0x00002e2e, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x4f4f4f4f, 0x4f4f4f4f, 0x4f4f4f4f, 0x4f4f4f4f, 0x4f4f4f4f, 0x4f4f4f4f,
        0x0000004f, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x0000004b, 0x00000000, 0x00000000, 0x00000000,
        0x90909090, 0x90909090, 0x90909090, 0x90909090, 0x90909090, 0x90909090,
        0x90909090, 0x90909090, 0x90909090, 0x90909090, 0x90909090, 0x90909090,
        0x00009090, 0x00000000, 0x00000000, 0x90000000, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x00001b1b, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x001b1b1b,
        0x1b1b1b1b, 0x0000001b, 0x00000000, 0x00000000, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b,
        0x1b1b1b1b, 0x1b1b1b1b, 0x1b1b1b1b, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x1d1d1d1d, 0x1d1d1d1d,
        0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d,
        0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d,
        0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d,
        0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x1d1d1d1d, 0x001d1d1d, 0x00000000,
        0x00000000, 0x00000000, 0x24242424, 0x24242424, 0x24242424, 0x24242424,
        0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424,
        0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424,
        0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424,
        0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424,
        0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424,
        0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424, 0x24242424,
        0x24242424, 0x24242424, 0x24242424, 0x00242424, 0x24242424, 0x24242424,
        0x00000024, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303,
        0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303,
        0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303,
        0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303,
        0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303,
        0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303,
        0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303,
        0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303, 0x03030303,
        0x03030303, 0x00030303, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808, 0x08080808,
        0x08080808, 0x08080808, 0x00000008, 0x00000000, 0x5d5d5d5d, 0x5d5d5d5d,
        0x5d5d5d5d, 0x5d5d5d5d, 0x5d5d5d5d, 0x5d5d5d5d, 0x5d5d5d5d, 0x005d5d5d,
        0x5d5d5d5d, 0x5d5d5d5d, 0x00005d5d, 0x5d5d0000, 0x91919191, 0x91919191,
        0x91919191, 0x91919191, 0x91919191, 0x91919191, 0x91919191, 0x91919191,
        0x91919191, 0x91919191, 0x91919191, 0x91919191, 0x91919191, 0x91919191,
        0x91919191, 0x91919191, 0x91919191, 0x91919191, 0x91919191, 0x00919191,
        0x91919191, 0x91919191, 0x00009191, 0x00000000, 0x09090909, 0x09090909,
        0x09090909, 0x09090909, 0x09090909, 0x09090909, 0x09090909, 0x00000909,
        0x09090909, 0x00000909, 0x00000000, 0x00000000, 0x75757575, 0x75757575,
        0x75757575, 0x75757575, 0x75757575, 0x75757575, 0x75757575, 0x75757575,
        0x75757575, 0x75757575, 0x75757575, 0x75757575, 0x75757575, 0x75757575,
        0x75757575, 0x75757575, 0x75757575, 0x00007575, 0x00000000, 0x00000000,
        0x75757575, 0x75757575, 0x75007575, 0x75757575, 0x75007575, 0x75757575,
        0x75757575, 0x75757575, 0x75757575, 0x75757575, 0x00000000, 0x75757500,
        0x75757575, 0x75757575, 0x75757575, 0x75757575, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x55555555,
        0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x55555555,
        0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x55555555,
        0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x00555555, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a,
        0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a,
        0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a,
        0x005a5a5a, 0x5a000000, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a,
        0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a,
        0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x00000000, 0x5a000000,
        0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x5a5a5a5a, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x30306592, 0x00000041, 0x00000000, 0x00000000,
        0x00003030, 0x00000000, 0x00000000, 0x00000000, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292, 0x92929292,
        0x00000000, 0x00000000, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141, 0x41414141,
        0x41414141, 0x00004141, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x92929292, 0x92929292, 0x00000092, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x3e3e3e3e, 0x3e3e3e00, 0x3e3e3e3e, 0x003e3e00, 0x3636363e, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x36363636,
        0x36363636, 0x36363636, 0x36363636, 0x36363636, 0x003e3e3e, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00363636, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3e3e3e3e, 0x00000000, 0x00000000,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565, 0x65656565,
        0x65656565, 0x00000000, 0x23232323, 0x23232323, 0x23232323, 0x23232323,
        0x23232323, 0x23232323, 0x23232323, 0x23232323, 0x23232323, 0x23232323,
        0x23232323, 0x23232323, 0x23232323, 0x23232323, 0x23232323, 0x23232323,
        0x23232323, 0x23232323, 0x23232323, 0x23232323, 0x23232323, 0x23232323,
        0x23232323, 0x23232323, 0x23232323, 0x23232323, 0x00232323, 0x00000000,
        0x23232323, 0x23232323, 0x23232323, 0x00000023, 0x23232323, 0x23232323,
        0x00000023, 0x00000000, 0x23232323, 0x23232323, 0x00002323, 0x23232323,
        0x19191919, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x00003838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x00383838,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x00001919, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x00191919, 0x19191900, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x38191919, 0x19193838, 0x19191919, 0x19191919, 0x19191919,
        0x38191919, 0x38383838, 0x19383838, 0x38383819, 0x38383838, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x38381919, 0x19193838, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00191919, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c,
        0x2c2c2c2c, 0x2c2c2c2c, 0x2c2c2c2c, 0x00002c2c, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00000000,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00191919,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x00000019, 0x00000000, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19190019, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19190019, 0x00190000, 0x00191900, 0x19191900, 0x19190019,
        0x19191919, 0x19191919, 0x19001919, 0x19191900, 0x19191919, 0x19191900,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19001919, 0x00191919, 0x19191900,
        0x19191919, 0x19190019, 0x19191919, 0x19190019, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19001919, 0x00191919,
        0x19191919, 0x00190019, 0x19190000, 0x19191919, 0x19190019, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x00001919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19190000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x82828282, 0x82828282, 0x82828282, 0x82828282,
        0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282,
        0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282,
        0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282,
        0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282,
        0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282, 0x82828282,
        0x82828282, 0x00000000, 0x00000000, 0x00000000, 0x82000000, 0x82828282,
        0x82828200, 0x82828282, 0x82828282, 0x82828282, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646, 0x46464646,
        0x46464646, 0x00464646, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x29292929, 0x00292929, 0x29292929, 0x29292929,
        0x29292929, 0x29292929, 0x29000029, 0x29292929, 0x29002929, 0x29290029,
        0x00292929, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x66666666, 0x66666666,
        0x66666666, 0x66666666, 0x66666666, 0x66666666, 0x66666666, 0x66666666,
        0x66666666, 0x66666666, 0x66666666, 0x00000066, 0x66666666, 0x66666666,
        0x66666666, 0x00006666, 0x66666666, 0x66666666, 0x00006666, 0x66660000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x99999999, 0x99999999,
        0x99999999, 0x99999999, 0x99999999, 0x99999999, 0x99999999, 0x00999999,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x9d9d9d9d, 0x9d9d9d9d,
        0x9d9d9d9d, 0x9d9d9d9d, 0x9d9d9d9d, 0x9d9d9d9d, 0x9d9d9d9d, 0x9d9d9d9d,
        0x9d9d9d9d, 0x9d9d9d9d, 0x9d9d9d9d, 0x9d9d9d9d, 0x9d9d9d9d, 0x9d9d9d9d,
        0x00009d9d, 0x9d000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x27272727, 0x00272727, 0x27272727, 0x00272700,
        0x27272727, 0x27272727, 0x27272727, 0x00272727, 0x57575757, 0x57575757,
        0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757,
        0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757,
        0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757,
        0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757,
        0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757,
        0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757,
        0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757,
        0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57575757, 0x57000057,
        0x57575757, 0x57575757, 0x57575757, 0x00575757, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x01010101, 0x01010101, 0x01010101, 0x01010101,
        0x01010101, 0x01010101, 0x01010101, 0x01010101, 0x01010101, 0x01010101,
        0x01010101, 0x01010101, 0x01010101, 0x01010101, 0x01010101, 0x01010101,
        0x01010101, 0x01010101, 0x01010101, 0x00000000, 0x01010101, 0x01010101,
        0x00000101, 0x01010000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x19191900, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x00000019, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x19191900, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00001919,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04040404, 0x04040400,
        0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404, 0x04040404,
        0x00040400, 0x04000004, 0x04040400, 0x04040404, 0x00040404, 0x04040404,
        0x04000400, 0x00000000, 0x00040000, 0x04000000, 0x04000400, 0x04040400,
        0x00040400, 0x04000004, 0x04000400, 0x04000400, 0x00040400, 0x04000004,
        0x00040404, 0x04040404, 0x00040404, 0x04040404, 0x04040400, 0x00040004,
        0x04040404, 0x04040404, 0x04000404, 0x04040404, 0x04040404, 0x04040404,
        0x04040404, 0x00000000, 0x04040400, 0x04040400, 0x04000404, 0x04040404,
        0x04040404, 0x04040404, 0x04040404, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000404, 0x00000000,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x00000000, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x00191919, 0x19191900, 0x19191919,
        0x19191919, 0x19191919, 0x19191900, 0x19191919, 0x19191919, 0x19191919,
        0x19191900, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x00001919, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00001919,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x19190000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x00191936, 0x00000000, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00000000,
        0x19191919, 0x19191919, 0x00000019, 0x00000000, 0x00001919, 0x00000000,
        0x00000000, 0x00000000, 0x19191919, 0x00001919, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x00000000, 0x19191900, 0x19191919, 0x19191919,
        0x19191919, 0x00000019, 0x19191919, 0x19191919, 0x19191919, 0x00000019,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00000000,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x00000019, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x00000000,
        0x00000019, 0x00000000, 0x00000000, 0x00000000, 0x19191919, 0x19191919,
        0x19191919, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x00001919, 0x00000000, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x00000000, 0x00000000, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00001919,
        0x00001919, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00000000,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x00001919,
        0x19191919, 0x00000019, 0x19191919, 0x00000019, 0x19191919, 0x00191919,
        0x00000000, 0x00000000, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x00000019, 0x19191919, 0x19191919,
        0x00191919, 0x00000000, 0x19191919, 0x00001919, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x00001919, 0x00000000, 0x19191919, 0x19191919,
        0x00000000, 0x00000000, 0x19191919, 0x00191919, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x00191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x00191919, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x19191919, 0x19191919,
        0x00001919, 0x00000000, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x00000030, 0x00000000, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x00003030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x00003030, 0x00000000,
        0x00000000, 0x00000000, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x00000030, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x00003030, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030, 0x30303030,
        0x30303030, 0x30303030, 0x00303030, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00001900, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919, 0x19191919,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838, 0x38383838,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 8,
    default: 0,
};

pub(crate) static SCRIPTS: [UcScript; 161] = [
    UcScript { index: 0, name: "Adlam" },
    UcScript { index: 1, name: "Ahom" },
    UcScript { index: 2, name: "Anatolian_Hieroglyphs" },
    UcScript { index: 3, name: "Arabic" },
    UcScript { index: 4, name: "Armenian" },
    UcScript { index: 5, name: "Avestan" },
    UcScript { index: 6, name: "Balinese" },
    UcScript { index: 7, name: "Bamum" },
    UcScript { index: 8, name: "Bassa_Vah" },
    UcScript { index: 9, name: "Batak" },
    UcScript { index: 10, name: "Bengali" },
    UcScript { index: 11, name: "Bhaiksuki" },
    UcScript { index: 12, name: "Bopomofo" },
    UcScript { index: 13, name: "Brahmi" },
    UcScript { index: 14, name: "Braille" },
    UcScript { index: 15, name: "Buginese" },
    UcScript { index: 16, name: "Buhid" },
    UcScript { index: 17, name: "Canadian_Aboriginal" },
    UcScript { index: 18, name: "Carian" },
    UcScript { index: 19, name: "Caucasian_Albanian" },
    UcScript { index: 20, name: "Chakma" },
    UcScript { index: 21, name: "Cham" },
    UcScript { index: 22, name: "Cherokee" },
    UcScript { index: 23, name: "Chorasmian" },
    UcScript { index: 24, name: "Common" },
    UcScript { index: 25, name: "Coptic" },
    UcScript { index: 26, name: "Cuneiform" },
    UcScript { index: 27, name: "Cypriot" },
    UcScript { index: 28, name: "Cypro_Minoan" },
    UcScript { index: 29, name: "Cyrillic" },
    UcScript { index: 30, name: "Deseret" },
    UcScript { index: 31, name: "Devanagari" },
    UcScript { index: 32, name: "Dives_Akuru" },
    UcScript { index: 33, name: "Dogra" },
    UcScript { index: 34, name: "Duployan" },
    UcScript { index: 35, name: "Egyptian_Hieroglyphs" },
    UcScript { index: 36, name: "Elbasan" },
    UcScript { index: 37, name: "Elymaic" },
    UcScript { index: 38, name: "Ethiopic" },
    UcScript { index: 39, name: "Georgian" },
    UcScript { index: 40, name: "Glagolitic" },
    UcScript { index: 41, name: "Gothic" },
    UcScript { index: 42, name: "Grantha" },
    UcScript { index: 43, name: "Greek" },
    UcScript { index: 44, name: "Gujarati" },
    UcScript { index: 45, name: "Gunjala_Gondi" },
    UcScript { index: 46, name: "Gurmukhi" },
    UcScript { index: 47, name: "Han" },
    UcScript { index: 48, name: "Hangul" },
    UcScript { index: 49, name: "Hanifi_Rohingya" },
    UcScript { index: 50, name: "Hanunoo" },
    UcScript { index: 51, name: "Hatran" },
    UcScript { index: 52, name: "Hebrew" },
    UcScript { index: 53, name: "Hiragana" },
    UcScript { index: 54, name: "Imperial_Aramaic" },
    UcScript { index: 55, name: "Inherited" },
    UcScript { index: 56, name: "Inscriptional_Pahlavi" },
    UcScript { index: 57, name: "Inscriptional_Parthian" },
    UcScript { index: 58, name: "Javanese" },
    UcScript { index: 59, name: "Kaithi" },
    UcScript { index: 60, name: "Kannada" },
    UcScript { index: 61, name: "Katakana" },
    UcScript { index: 62, name: "Kayah_Li" },
    UcScript { index: 63, name: "Kharoshthi" },
    UcScript { index: 64, name: "Khitan_Small_Script" },
    UcScript { index: 65, name: "Khmer" },
    UcScript { index: 66, name: "Khojki" },
    UcScript { index: 67, name: "Khudawadi" },
    UcScript { index: 68, name: "Lao" },
    UcScript { index: 69, name: "Latin" },
    UcScript { index: 70, name: "Lepcha" },
    UcScript { index: 71, name: "Limbu" },
    UcScript { index: 72, name: "Linear_A" },
    UcScript { index: 73, name: "Linear_B" },
    UcScript { index: 74, name: "Lisu" },
    UcScript { index: 75, name: "Lycian" },
    UcScript { index: 76, name: "Lydian" },
    UcScript { index: 77, name: "Mahajani" },
    UcScript { index: 78, name: "Makasar" },
    UcScript { index: 79, name: "Malayalam" },
    UcScript { index: 80, name: "Mandaic" },
    UcScript { index: 81, name: "Manichaean" },
    UcScript { index: 82, name: "Marchen" },
    UcScript { index: 83, name: "Masaram_Gondi" },
    UcScript { index: 84, name: "Medefaidrin" },
    UcScript { index: 85, name: "Meetei_Mayek" },
    UcScript { index: 86, name: "Mende_Kikakui" },
    UcScript { index: 87, name: "Meroitic_Cursive" },
    UcScript { index: 88, name: "Meroitic_Hieroglyphs" },
    UcScript { index: 89, name: "Miao" },
    UcScript { index: 90, name: "Modi" },
    UcScript { index: 91, name: "Mongolian" },
    UcScript { index: 92, name: "Mro" },
    UcScript { index: 93, name: "Multani" },
    UcScript { index: 94, name: "Myanmar" },
    UcScript { index: 95, name: "Nabataean" },
    UcScript { index: 96, name: "Nandinagari" },
    UcScript { index: 97, name: "New_Tai_Lue" },
    UcScript { index: 98, name: "Newa" },
    UcScript { index: 99, name: "Nko" },
    UcScript { index: 100, name: "Nushu" },
    UcScript { index: 101, name: "Nyiakeng_Puachue_Hmong" },
    UcScript { index: 102, name: "Ogham" },
    UcScript { index: 103, name: "Ol_Chiki" },
    UcScript { index: 104, name: "Old_Hungarian" },
    UcScript { index: 105, name: "Old_Italic" },
    UcScript { index: 106, name: "Old_North_Arabian" },
    UcScript { index: 107, name: "Old_Permic" },
    UcScript { index: 108, name: "Old_Persian" },
    UcScript { index: 109, name: "Old_Sogdian" },
    UcScript { index: 110, name: "Old_South_Arabian" },
    UcScript { index: 111, name: "Old_Turkic" },
    UcScript { index: 112, name: "Old_Uyghur" },
    UcScript { index: 113, name: "Oriya" },
    UcScript { index: 114, name: "Osage" },
    UcScript { index: 115, name: "Osmanya" },
    UcScript { index: 116, name: "Pahawh_Hmong" },
    UcScript { index: 117, name: "Palmyrene" },
    UcScript { index: 118, name: "Pau_Cin_Hau" },
    UcScript { index: 119, name: "Phags_Pa" },
    UcScript { index: 120, name: "Phoenician" },
    UcScript { index: 121, name: "Psalter_Pahlavi" },
    UcScript { index: 122, name: "Rejang" },
    UcScript { index: 123, name: "Runic" },
    UcScript { index: 124, name: "Samaritan" },
    UcScript { index: 125, name: "Saurashtra" },
    UcScript { index: 126, name: "Sharada" },
    UcScript { index: 127, name: "Shavian" },
    UcScript { index: 128, name: "Siddham" },
    UcScript { index: 129, name: "SignWriting" },
    UcScript { index: 130, name: "Sinhala" },
    UcScript { index: 131, name: "Sogdian" },
    UcScript { index: 132, name: "Sora_Sompeng" },
    UcScript { index: 133, name: "Soyombo" },
    UcScript { index: 134, name: "Sundanese" },
    UcScript { index: 135, name: "Syloti_Nagri" },
    UcScript { index: 136, name: "Syriac" },
    UcScript { index: 137, name: "Tagalog" },
    UcScript { index: 138, name: "Tagbanwa" },
    UcScript { index: 139, name: "Tai_Le" },
    UcScript { index: 140, name: "Tai_Tham" },
    UcScript { index: 141, name: "Tai_Viet" },
    UcScript { index: 142, name: "Takri" },
    UcScript { index: 143, name: "Tamil" },
    UcScript { index: 144, name: "Tangsa" },
    UcScript { index: 145, name: "Tangut" },
    UcScript { index: 146, name: "Telugu" },
    UcScript { index: 147, name: "Thaana" },
    UcScript { index: 148, name: "Thai" },
    UcScript { index: 149, name: "Tibetan" },
    UcScript { index: 150, name: "Tifinagh" },
    UcScript { index: 151, name: "Tirhuta" },
    UcScript { index: 152, name: "Toto" },
    UcScript { index: 153, name: "Ugaritic" },
    UcScript { index: 154, name: "Vai" },
    UcScript { index: 155, name: "Vithkuqi" },
    UcScript { index: 156, name: "Wancho" },
    UcScript { index: 157, name: "Warang_Citi" },
    UcScript { index: 158, name: "Yezidi" },
    UcScript { index: 159, name: "Yi" },
    UcScript { index: 160, name: "Zanabazar_Square" },
];

pub(crate) static BLOCKS: [UcBlock; 320] = [
    UcBlock { start: 0x0000, end: 0x007F, name: "Basic Latin" },
    UcBlock { start: 0x0080, end: 0x00FF, name: "Latin-1 Supplement" },
    UcBlock { start: 0x0100, end: 0x017F, name: "Latin Extended-A" },
    UcBlock { start: 0x0180, end: 0x024F, name: "Latin Extended-B" },
    UcBlock { start: 0x0250, end: 0x02AF, name: "IPA Extensions" },
    UcBlock { start: 0x02B0, end: 0x02FF, name: "Spacing Modifier Letters" },
    UcBlock { start: 0x0300, end: 0x036F, name: "Combining Diacritical Marks" },
    UcBlock { start: 0x0370, end: 0x03FF, name: "Greek and Coptic" },
    UcBlock { start: 0x0400, end: 0x04FF, name: "Cyrillic" },
    UcBlock { start: 0x0500, end: 0x052F, name: "Cyrillic Supplement" },
    UcBlock { start: 0x0530, end: 0x058F, name: "Armenian" },
    UcBlock { start: 0x0590, end: 0x05FF, name: "Hebrew" },
    UcBlock { start: 0x0600, end: 0x06FF, name: "Arabic" },
    UcBlock { start: 0x0700, end: 0x074F, name: "Syriac" },
    UcBlock { start: 0x0750, end: 0x077F, name: "Arabic Supplement" },
    UcBlock { start: 0x0780, end: 0x07BF, name: "Thaana" },
    UcBlock { start: 0x07C0, end: 0x07FF, name: "NKo" },
    UcBlock { start: 0x0800, end: 0x083F, name: "Samaritan" },
    UcBlock { start: 0x0840, end: 0x085F, name: "Mandaic" },
    UcBlock { start: 0x0860, end: 0x086F, name: "Syriac Supplement" },
    UcBlock { start: 0x0870, end: 0x089F, name: "Arabic Extended-B" },
    UcBlock { start: 0x08A0, end: 0x08FF, name: "Arabic Extended-A" },
    UcBlock { start: 0x0900, end: 0x097F, name: "Devanagari" },
    UcBlock { start: 0x0980, end: 0x09FF, name: "Bengali" },
    UcBlock { start: 0x0A00, end: 0x0A7F, name: "Gurmukhi" },
    UcBlock { start: 0x0A80, end: 0x0AFF, name: "Gujarati" },
    UcBlock { start: 0x0B00, end: 0x0B7F, name: "Oriya" },
    UcBlock { start: 0x0B80, end: 0x0BFF, name: "Tamil" },
    UcBlock { start: 0x0C00, end: 0x0C7F, name: "Telugu" },
    UcBlock { start: 0x0C80, end: 0x0CFF, name: "Kannada" },
    UcBlock { start: 0x0D00, end: 0x0D7F, name: "Malayalam" },
    UcBlock { start: 0x0D80, end: 0x0DFF, name: "Sinhala" },
    UcBlock { start: 0x0E00, end: 0x0E7F, name: "Thai" },
    UcBlock { start: 0x0E80, end: 0x0EFF, name: "Lao" },
    UcBlock { start: 0x0F00, end: 0x0FFF, name: "Tibetan" },
    UcBlock { start: 0x1000, end: 0x109F, name: "Myanmar" },
    UcBlock { start: 0x10A0, end: 0x10FF, name: "Georgian" },
    UcBlock { start: 0x1100, end: 0x11FF, name: "Hangul Jamo" },
    UcBlock { start: 0x1200, end: 0x137F, name: "Ethiopic" },
    UcBlock { start: 0x1380, end: 0x139F, name: "Ethiopic Supplement" },
    UcBlock { start: 0x13A0, end: 0x13FF, name: "Cherokee" },
    UcBlock { start: 0x1400, end: 0x167F, name: "Unified Canadian Aboriginal Syllabics" },
    UcBlock { start: 0x1680, end: 0x169F, name: "Ogham" },
    UcBlock { start: 0x16A0, end: 0x16FF, name: "Runic" },
    UcBlock { start: 0x1700, end: 0x171F, name: "Tagalog" },
    UcBlock { start: 0x1720, end: 0x173F, name: "Hanunoo" },
    UcBlock { start: 0x1740, end: 0x175F, name: "Buhid" },
    UcBlock { start: 0x1760, end: 0x177F, name: "Tagbanwa" },
    UcBlock { start: 0x1780, end: 0x17FF, name: "Khmer" },
    UcBlock { start: 0x1800, end: 0x18AF, name: "Mongolian" },
    UcBlock { start: 0x18B0, end: 0x18FF, name: "Unified Canadian Aboriginal Syllabics Extended" },
    UcBlock { start: 0x1900, end: 0x194F, name: "Limbu" },
    UcBlock { start: 0x1950, end: 0x197F, name: "Tai Le" },
    UcBlock { start: 0x1980, end: 0x19DF, name: "New Tai Lue" },
    UcBlock { start: 0x19E0, end: 0x19FF, name: "Khmer Symbols" },
    UcBlock { start: 0x1A00, end: 0x1A1F, name: "Buginese" },
    UcBlock { start: 0x1A20, end: 0x1AAF, name: "Tai Tham" },
    UcBlock { start: 0x1AB0, end: 0x1AFF, name: "Combining Diacritical Marks Extended" },
    UcBlock { start: 0x1B00, end: 0x1B7F, name: "Balinese" },
    UcBlock { start: 0x1B80, end: 0x1BBF, name: "Sundanese" },
    UcBlock { start: 0x1BC0, end: 0x1BFF, name: "Batak" },
    UcBlock { start: 0x1C00, end: 0x1C4F, name: "Lepcha" },
    UcBlock { start: 0x1C50, end: 0x1C7F, name: "Ol Chiki" },
    UcBlock { start: 0x1C80, end: 0x1C8F, name: "Cyrillic Extended-C" },
    UcBlock { start: 0x1C90, end: 0x1CBF, name: "Georgian Extended" },
    UcBlock { start: 0x1CC0, end: 0x1CCF, name: "Sundanese Supplement" },
    UcBlock { start: 0x1CD0, end: 0x1CFF, name: "Vedic Extensions" },
    UcBlock { start: 0x1D00, end: 0x1D7F, name: "Phonetic Extensions" },
    UcBlock { start: 0x1D80, end: 0x1DBF, name: "Phonetic Extensions Supplement" },
    UcBlock { start: 0x1DC0, end: 0x1DFF, name: "Combining Diacritical Marks Supplement" },
    UcBlock { start: 0x1E00, end: 0x1EFF, name: "Latin Extended Additional" },
    UcBlock { start: 0x1F00, end: 0x1FFF, name: "Greek Extended" },
    UcBlock { start: 0x2000, end: 0x206F, name: "General Punctuation" },
    UcBlock { start: 0x2070, end: 0x209F, name: "Superscripts and Subscripts" },
    UcBlock { start: 0x20A0, end: 0x20CF, name: "Currency Symbols" },
    UcBlock { start: 0x20D0, end: 0x20FF, name: "Combining Diacritical Marks for Symbols" },
    UcBlock { start: 0x2100, end: 0x214F, name: "Letterlike Symbols" },
    UcBlock { start: 0x2150, end: 0x218F, name: "Number Forms" },
    UcBlock { start: 0x2190, end: 0x21FF, name: "Arrows" },
    UcBlock { start: 0x2200, end: 0x22FF, name: "Mathematical Operators" },
    UcBlock { start: 0x2300, end: 0x23FF, name: "Miscellaneous Technical" },
    UcBlock { start: 0x2400, end: 0x243F, name: "Control Pictures" },
    UcBlock { start: 0x2440, end: 0x245F, name: "Optical Character Recognition" },
    UcBlock { start: 0x2460, end: 0x24FF, name: "Enclosed Alphanumerics" },
    UcBlock { start: 0x2500, end: 0x257F, name: "Box Drawing" },
    UcBlock { start: 0x2580, end: 0x259F, name: "Block Elements" },
    UcBlock { start: 0x25A0, end: 0x25FF, name: "Geometric Shapes" },
    UcBlock { start: 0x2600, end: 0x26FF, name: "Miscellaneous Symbols" },
    UcBlock { start: 0x2700, end: 0x27BF, name: "Dingbats" },
    UcBlock { start: 0x27C0, end: 0x27EF, name: "Miscellaneous Mathematical Symbols-A" },
    UcBlock { start: 0x27F0, end: 0x27FF, name: "Supplemental Arrows-A" },
    UcBlock { start: 0x2800, end: 0x28FF, name: "Braille Patterns" },
    UcBlock { start: 0x2900, end: 0x297F, name: "Supplemental Arrows-B" },
    UcBlock { start: 0x2980, end: 0x29FF, name: "Miscellaneous Mathematical Symbols-B" },
    UcBlock { start: 0x2A00, end: 0x2AFF, name: "Supplemental Mathematical Operators" },
    UcBlock { start: 0x2B00, end: 0x2BFF, name: "Miscellaneous Symbols and Arrows" },
    UcBlock { start: 0x2C00, end: 0x2C5F, name: "Glagolitic" },
    UcBlock { start: 0x2C60, end: 0x2C7F, name: "Latin Extended-C" },
    UcBlock { start: 0x2C80, end: 0x2CFF, name: "Coptic" },
    UcBlock { start: 0x2D00, end: 0x2D2F, name: "Georgian Supplement" },
    UcBlock { start: 0x2D30, end: 0x2D7F, name: "Tifinagh" },
    UcBlock { start: 0x2D80, end: 0x2DDF, name: "Ethiopic Extended" },
    UcBlock { start: 0x2DE0, end: 0x2DFF, name: "Cyrillic Extended-A" },
    UcBlock { start: 0x2E00, end: 0x2E7F, name: "Supplemental Punctuation" },
    UcBlock { start: 0x2E80, end: 0x2EFF, name: "CJK Radicals Supplement" },
    UcBlock { start: 0x2F00, end: 0x2FDF, name: "Kangxi Radicals" },
    UcBlock { start: 0x2FF0, end: 0x2FFF, name: "Ideographic Description Characters" },
    UcBlock { start: 0x3000, end: 0x303F, name: "CJK Symbols and Punctuation" },
    UcBlock { start: 0x3040, end: 0x309F, name: "Hiragana" },
    UcBlock { start: 0x30A0, end: 0x30FF, name: "Katakana" },
    UcBlock { start: 0x3100, end: 0x312F, name: "Bopomofo" },
    UcBlock { start: 0x3130, end: 0x318F, name: "Hangul Compatibility Jamo" },
    UcBlock { start: 0x3190, end: 0x319F, name: "Kanbun" },
    UcBlock { start: 0x31A0, end: 0x31BF, name: "Bopomofo Extended" },
    UcBlock { start: 0x31C0, end: 0x31EF, name: "CJK Strokes" },
    UcBlock { start: 0x31F0, end: 0x31FF, name: "Katakana Phonetic Extensions" },
    UcBlock { start: 0x3200, end: 0x32FF, name: "Enclosed CJK Letters and Months" },
    UcBlock { start: 0x3300, end: 0x33FF, name: "CJK Compatibility" },
    UcBlock { start: 0x3400, end: 0x4DBF, name: "CJK Unified Ideographs Extension A" },
    UcBlock { start: 0x4DC0, end: 0x4DFF, name: "Yijing Hexagram Symbols" },
    UcBlock { start: 0x4E00, end: 0x9FFF, name: "CJK Unified Ideographs" },
    UcBlock { start: 0xA000, end: 0xA48F, name: "Yi Syllables" },
    UcBlock { start: 0xA490, end: 0xA4CF, name: "Yi Radicals" },
    UcBlock { start: 0xA4D0, end: 0xA4FF, name: "Lisu" },
    UcBlock { start: 0xA500, end: 0xA63F, name: "Vai" },
    UcBlock { start: 0xA640, end: 0xA69F, name: "Cyrillic Extended-B" },
    UcBlock { start: 0xA6A0, end: 0xA6FF, name: "Bamum" },
    UcBlock { start: 0xA700, end: 0xA71F, name: "Modifier Tone Letters" },
    UcBlock { start: 0xA720, end: 0xA7FF, name: "Latin Extended-D" },
    UcBlock { start: 0xA800, end: 0xA82F, name: "Syloti Nagri" },
    UcBlock { start: 0xA830, end: 0xA83F, name: "Common Indic Number Forms" },
    UcBlock { start: 0xA840, end: 0xA87F, name: "Phags-pa" },
    UcBlock { start: 0xA880, end: 0xA8DF, name: "Saurashtra" },
    UcBlock { start: 0xA8E0, end: 0xA8FF, name: "Devanagari Extended" },
    UcBlock { start: 0xA900, end: 0xA92F, name: "Kayah Li" },
    UcBlock { start: 0xA930, end: 0xA95F, name: "Rejang" },
    UcBlock { start: 0xA960, end: 0xA97F, name: "Hangul Jamo Extended-A" },
    UcBlock { start: 0xA980, end: 0xA9DF, name: "Javanese" },
    UcBlock { start: 0xA9E0, end: 0xA9FF, name: "Myanmar Extended-B" },
    UcBlock { start: 0xAA00, end: 0xAA5F, name: "Cham" },
    UcBlock { start: 0xAA60, end: 0xAA7F, name: "Myanmar Extended-A" },
    UcBlock { start: 0xAA80, end: 0xAADF, name: "Tai Viet" },
    UcBlock { start: 0xAAE0, end: 0xAAFF, name: "Meetei Mayek Extensions" },
    UcBlock { start: 0xAB00, end: 0xAB2F, name: "Ethiopic Extended-A" },
    UcBlock { start: 0xAB30, end: 0xAB6F, name: "Latin Extended-E" },
    UcBlock { start: 0xAB70, end: 0xABBF, name: "Cherokee Supplement" },
    UcBlock { start: 0xABC0, end: 0xABFF, name: "Meetei Mayek" },
    UcBlock { start: 0xAC00, end: 0xD7AF, name: "Hangul Syllables" },
    UcBlock { start: 0xD7B0, end: 0xD7FF, name: "Hangul Jamo Extended-B" },
    UcBlock { start: 0xD800, end: 0xDB7F, name: "High Surrogates" },
    UcBlock { start: 0xDB80, end: 0xDBFF, name: "High Private Use Surrogates" },
    UcBlock { start: 0xDC00, end: 0xDFFF, name: "Low Surrogates" },
    UcBlock { start: 0xE000, end: 0xF8FF, name: "Private Use Area" },
    UcBlock { start: 0xF900, end: 0xFAFF, name: "CJK Compatibility Ideographs" },
    UcBlock { start: 0xFB00, end: 0xFB4F, name: "Alphabetic Presentation Forms" },
    UcBlock { start: 0xFB50, end: 0xFDFF, name: "Arabic Presentation Forms-A" },
    UcBlock { start: 0xFE00, end: 0xFE0F, name: "Variation Selectors" },
    UcBlock { start: 0xFE10, end: 0xFE1F, name: "Vertical Forms" },
    UcBlock { start: 0xFE20, end: 0xFE2F, name: "Combining Half Marks" },
    UcBlock { start: 0xFE30, end: 0xFE4F, name: "CJK Compatibility Forms" },
    UcBlock { start: 0xFE50, end: 0xFE6F, name: "Small Form Variants" },
    UcBlock { start: 0xFE70, end: 0xFEFF, name: "Arabic Presentation Forms-B" },
    UcBlock { start: 0xFF00, end: 0xFFEF, name: "Halfwidth and Fullwidth Forms" },
    UcBlock { start: 0xFFF0, end: 0xFFFF, name: "Specials" },
    UcBlock { start: 0x10000, end: 0x1007F, name: "Linear B Syllabary" },
    UcBlock { start: 0x10080, end: 0x100FF, name: "Linear B Ideograms" },
    UcBlock { start: 0x10100, end: 0x1013F, name: "Aegean Numbers" },
    UcBlock { start: 0x10140, end: 0x1018F, name: "Ancient Greek Numbers" },
    UcBlock { start: 0x10190, end: 0x101CF, name: "Ancient Symbols" },
    UcBlock { start: 0x101D0, end: 0x101FF, name: "Phaistos Disc" },
    UcBlock { start: 0x10280, end: 0x1029F, name: "Lycian" },
    UcBlock { start: 0x102A0, end: 0x102DF, name: "Carian" },
    UcBlock { start: 0x102E0, end: 0x102FF, name: "Coptic Epact Numbers" },
    UcBlock { start: 0x10300, end: 0x1032F, name: "Old Italic" },
    UcBlock { start: 0x10330, end: 0x1034F, name: "Gothic" },
    UcBlock { start: 0x10350, end: 0x1037F, name: "Old Permic" },
    UcBlock { start: 0x10380, end: 0x1039F, name: "Ugaritic" },
    UcBlock { start: 0x103A0, end: 0x103DF, name: "Old Persian" },
    UcBlock { start: 0x10400, end: 0x1044F, name: "Deseret" },
    UcBlock { start: 0x10450, end: 0x1047F, name: "Shavian" },
    UcBlock { start: 0x10480, end: 0x104AF, name: "Osmanya" },
    UcBlock { start: 0x104B0, end: 0x104FF, name: "Osage" },
    UcBlock { start: 0x10500, end: 0x1052F, name: "Elbasan" },
    UcBlock { start: 0x10530, end: 0x1056F, name: "Caucasian Albanian" },
    UcBlock { start: 0x10570, end: 0x105BF, name: "Vithkuqi" },
    UcBlock { start: 0x10600, end: 0x1077F, name: "Linear A" },
    UcBlock { start: 0x10780, end: 0x107BF, name: "Latin Extended-F" },
    UcBlock { start: 0x10800, end: 0x1083F, name: "Cypriot Syllabary" },
    UcBlock { start: 0x10840, end: 0x1085F, name: "Imperial Aramaic" },
    UcBlock { start: 0x10860, end: 0x1087F, name: "Palmyrene" },
    UcBlock { start: 0x10880, end: 0x108AF, name: "Nabataean" },
    UcBlock { start: 0x108E0, end: 0x108FF, name: "Hatran" },
    UcBlock { start: 0x10900, end: 0x1091F, name: "Phoenician" },
    UcBlock { start: 0x10920, end: 0x1093F, name: "Lydian" },
    UcBlock { start: 0x10980, end: 0x1099F, name: "Meroitic Hieroglyphs" },
    UcBlock { start: 0x109A0, end: 0x109FF, name: "Meroitic Cursive" },
    UcBlock { start: 0x10A00, end: 0x10A5F, name: "Kharoshthi" },
    UcBlock { start: 0x10A60, end: 0x10A7F, name: "Old South Arabian" },
    UcBlock { start: 0x10A80, end: 0x10A9F, name: "Old North Arabian" },
    UcBlock { start: 0x10AC0, end: 0x10AFF, name: "Manichaean" },
    UcBlock { start: 0x10B00, end: 0x10B3F, name: "Avestan" },
    UcBlock { start: 0x10B40, end: 0x10B5F, name: "Inscriptional Parthian" },
    UcBlock { start: 0x10B60, end: 0x10B7F, name: "Inscriptional Pahlavi" },
    UcBlock { start: 0x10B80, end: 0x10BAF, name: "Psalter Pahlavi" },
    UcBlock { start: 0x10C00, end: 0x10C4F, name: "Old Turkic" },
    UcBlock { start: 0x10C80, end: 0x10CFF, name: "Old Hungarian" },
    UcBlock { start: 0x10D00, end: 0x10D3F, name: "Hanifi Rohingya" },
    UcBlock { start: 0x10E60, end: 0x10E7F, name: "Rumi Numeral Symbols" },
    UcBlock { start: 0x10E80, end: 0x10EBF, name: "Yezidi" },
    UcBlock { start: 0x10F00, end: 0x10F2F, name: "Old Sogdian" },
    UcBlock { start: 0x10F30, end: 0x10F6F, name: "Sogdian" },
    UcBlock { start: 0x10F70, end: 0x10FAF, name: "Old Uyghur" },
    UcBlock { start: 0x10FB0, end: 0x10FDF, name: "Chorasmian" },
    UcBlock { start: 0x10FE0, end: 0x10FFF, name: "Elymaic" },
    UcBlock { start: 0x11000, end: 0x1107F, name: "Brahmi" },
    UcBlock { start: 0x11080, end: 0x110CF, name: "Kaithi" },
    UcBlock { start: 0x110D0, end: 0x110FF, name: "Sora Sompeng" },
    UcBlock { start: 0x11100, end: 0x1114F, name: "Chakma" },
    UcBlock { start: 0x11150, end: 0x1117F, name: "Mahajani" },
    UcBlock { start: 0x11180, end: 0x111DF, name: "Sharada" },
    UcBlock { start: 0x111E0, end: 0x111FF, name: "Sinhala Archaic Numbers" },
    UcBlock { start: 0x11200, end: 0x1124F, name: "Khojki" },
    UcBlock { start: 0x11280, end: 0x112AF, name: "Multani" },
    UcBlock { start: 0x112B0, end: 0x112FF, name: "Khudawadi" },
    UcBlock { start: 0x11300, end: 0x1137F, name: "Grantha" },
    UcBlock { start: 0x11400, end: 0x1147F, name: "Newa" },
    UcBlock { start: 0x11480, end: 0x114DF, name: "Tirhuta" },
    UcBlock { start: 0x11580, end: 0x115FF, name: "Siddham" },
    UcBlock { start: 0x11600, end: 0x1165F, name: "Modi" },
    UcBlock { start: 0x11660, end: 0x1167F, name: "Mongolian Supplement" },
    UcBlock { start: 0x11680, end: 0x116CF, name: "Takri" },
    UcBlock { start: 0x11700, end: 0x1174F, name: "Ahom" },
    UcBlock { start: 0x11800, end: 0x1184F, name: "Dogra" },
    UcBlock { start: 0x118A0, end: 0x118FF, name: "Warang Citi" },
    UcBlock { start: 0x11900, end: 0x1195F, name: "Dives Akuru" },
    UcBlock { start: 0x119A0, end: 0x119FF, name: "Nandinagari" },
    UcBlock { start: 0x11A00, end: 0x11A4F, name: "Zanabazar Square" },
    UcBlock { start: 0x11A50, end: 0x11AAF, name: "Soyombo" },
    UcBlock { start: 0x11AB0, end: 0x11ABF, name: "Unified Canadian Aboriginal Syllabics Extended-A" },
    UcBlock { start: 0x11AC0, end: 0x11AFF, name: "Pau Cin Hau" },
    UcBlock { start: 0x11C00, end: 0x11C6F, name: "Bhaiksuki" },
    UcBlock { start: 0x11C70, end: 0x11CBF, name: "Marchen" },
    UcBlock { start: 0x11D00, end: 0x11D5F, name: "Masaram Gondi" },
    UcBlock { start: 0x11D60, end: 0x11DAF, name: "Gunjala Gondi" },
    UcBlock { start: 0x11EE0, end: 0x11EFF, name: "Makasar" },
    UcBlock { start: 0x11FB0, end: 0x11FBF, name: "Lisu Supplement" },
    UcBlock { start: 0x11FC0, end: 0x11FFF, name: "Tamil Supplement" },
    UcBlock { start: 0x12000, end: 0x123FF, name: "Cuneiform" },
    UcBlock { start: 0x12400, end: 0x1247F, name: "Cuneiform Numbers and Punctuation" },
    UcBlock { start: 0x12480, end: 0x1254F, name: "Early Dynastic Cuneiform" },
    UcBlock { start: 0x12F90, end: 0x12FFF, name: "Cypro-Minoan" },
    UcBlock { start: 0x13000, end: 0x1342F, name: "Egyptian Hieroglyphs" },
    UcBlock { start: 0x13430, end: 0x1343F, name: "Egyptian Hieroglyph Format Controls" },
    UcBlock { start: 0x14400, end: 0x1467F, name: "Anatolian Hieroglyphs" },
    UcBlock { start: 0x16800, end: 0x16A3F, name: "Bamum Supplement" },
    UcBlock { start: 0x16A40, end: 0x16A6F, name: "Mro" },
    UcBlock { start: 0x16A70, end: 0x16ACF, name: "Tangsa" },
    UcBlock { start: 0x16AD0, end: 0x16AFF, name: "Bassa Vah" },
    UcBlock { start: 0x16B00, end: 0x16B8F, name: "Pahawh Hmong" },
    UcBlock { start: 0x16E40, end: 0x16E9F, name: "Medefaidrin" },
    UcBlock { start: 0x16F00, end: 0x16F9F, name: "Miao" },
    UcBlock { start: 0x16FE0, end: 0x16FFF, name: "Ideographic Symbols and Punctuation" },
    UcBlock { start: 0x17000, end: 0x187FF, name: "Tangut" },
    UcBlock { start: 0x18800, end: 0x18AFF, name: "Tangut Components" },
    UcBlock { start: 0x18B00, end: 0x18CFF, name: "Khitan Small Script" },
    UcBlock { start: 0x18D00, end: 0x18D7F, name: "Tangut Supplement" },
    UcBlock { start: 0x1AFF0, end: 0x1AFFF, name: "Kana Extended-B" },
    UcBlock { start: 0x1B000, end: 0x1B0FF, name: "Kana Supplement" },
    UcBlock { start: 0x1B100, end: 0x1B12F, name: "Kana Extended-A" },
    UcBlock { start: 0x1B130, end: 0x1B16F, name: "Small Kana Extension" },
    UcBlock { start: 0x1B170, end: 0x1B2FF, name: "Nushu" },
    UcBlock { start: 0x1BC00, end: 0x1BC9F, name: "Duployan" },
    UcBlock { start: 0x1BCA0, end: 0x1BCAF, name: "Shorthand Format Controls" },
    UcBlock { start: 0x1CF00, end: 0x1CFCF, name: "Znamenny Musical Notation" },
    UcBlock { start: 0x1D000, end: 0x1D0FF, name: "Byzantine Musical Symbols" },
    UcBlock { start: 0x1D100, end: 0x1D1FF, name: "Musical Symbols" },
    UcBlock { start: 0x1D200, end: 0x1D24F, name: "Ancient Greek Musical Notation" },
    UcBlock { start: 0x1D2E0, end: 0x1D2FF, name: "Mayan Numerals" },
    UcBlock { start: 0x1D300, end: 0x1D35F, name: "Tai Xuan Jing Symbols" },
    UcBlock { start: 0x1D360, end: 0x1D37F, name: "Counting Rod Numerals" },
    UcBlock { start: 0x1D400, end: 0x1D7FF, name: "Mathematical Alphanumeric Symbols" },
    UcBlock { start: 0x1D800, end: 0x1DAAF, name: "Sutton SignWriting" },
    UcBlock { start: 0x1DF00, end: 0x1DFFF, name: "Latin Extended-G" },
    UcBlock { start: 0x1E000, end: 0x1E02F, name: "Glagolitic Supplement" },
    UcBlock { start: 0x1E100, end: 0x1E14F, name: "Nyiakeng Puachue Hmong" },
    UcBlock { start: 0x1E290, end: 0x1E2BF, name: "Toto" },
    UcBlock { start: 0x1E2C0, end: 0x1E2FF, name: "Wancho" },
    UcBlock { start: 0x1E7E0, end: 0x1E7FF, name: "Ethiopic Extended-B" },
    UcBlock { start: 0x1E800, end: 0x1E8DF, name: "Mende Kikakui" },
    UcBlock { start: 0x1E900, end: 0x1E95F, name: "Adlam" },
    UcBlock { start: 0x1EC70, end: 0x1ECBF, name: "Indic Siyaq Numbers" },
    UcBlock { start: 0x1ED00, end: 0x1ED4F, name: "Ottoman Siyaq Numbers" },
    UcBlock { start: 0x1EE00, end: 0x1EEFF, name: "Arabic Mathematical Alphabetic Symbols" },
    UcBlock { start: 0x1F000, end: 0x1F02F, name: "Mahjong Tiles" },
    UcBlock { start: 0x1F030, end: 0x1F09F, name: "Domino Tiles" },
    UcBlock { start: 0x1F0A0, end: 0x1F0FF, name: "Playing Cards" },
    UcBlock { start: 0x1F100, end: 0x1F1FF, name: "Enclosed Alphanumeric Supplement" },
    UcBlock { start: 0x1F200, end: 0x1F2FF, name: "Enclosed Ideographic Supplement" },
    UcBlock { start: 0x1F300, end: 0x1F5FF, name: "Miscellaneous Symbols and Pictographs" },
    UcBlock { start: 0x1F600, end: 0x1F64F, name: "Emoticons" },
    UcBlock { start: 0x1F650, end: 0x1F67F, name: "Ornamental Dingbats" },
    UcBlock { start: 0x1F680, end: 0x1F6FF, name: "Transport and Map Symbols" },
    UcBlock { start: 0x1F700, end: 0x1F77F, name: "Alchemical Symbols" },
    UcBlock { start: 0x1F780, end: 0x1F7FF, name: "Geometric Shapes Extended" },
    UcBlock { start: 0x1F800, end: 0x1F8FF, name: "Supplemental Arrows-C" },
    UcBlock { start: 0x1F900, end: 0x1F9FF, name: "Supplemental Symbols and Pictographs" },
    UcBlock { start: 0x1FA00, end: 0x1FA6F, name: "Chess Symbols" },
    UcBlock { start: 0x1FA70, end: 0x1FAFF, name: "Symbols and Pictographs Extended-A" },
    UcBlock { start: 0x1FB00, end: 0x1FBFF, name: "Symbols for Legacy Computing" },
    UcBlock { start: 0x20000, end: 0x2A6DF, name: "CJK Unified Ideographs Extension B" },
    UcBlock { start: 0x2A700, end: 0x2B73F, name: "CJK Unified Ideographs Extension C" },
    UcBlock { start: 0x2B740, end: 0x2B81F, name: "CJK Unified Ideographs Extension D" },
    UcBlock { start: 0x2B820, end: 0x2CEAF, name: "CJK Unified Ideographs Extension E" },
    UcBlock { start: 0x2CEB0, end: 0x2EBEF, name: "CJK Unified Ideographs Extension F" },
    UcBlock { start: 0x2F800, end: 0x2FA1F, name: "CJK Compatibility Ideographs Supplement" },
    UcBlock { start: 0x30000, end: 0x3134F, name: "CJK Unified Ideographs Extension G" },
    UcBlock { start: 0xE0000, end: 0xE007F, name: "Tags" },
    UcBlock { start: 0xE0100, end: 0xE01EF, name: "Variation Selectors Supplement" },
    UcBlock { start: 0xF0000, end: 0xFFFFF, name: "Supplementary Private Use Area-A" },
    UcBlock { start: 0x100000, end: 0x10FFFF, name: "Supplementary Private Use Area-B" },
];

pub(crate) static NUMERIC: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0003, 0xffff, 0x0004, 0xffff, 0xffff, 0x0005, 0x0006, 0x0005, 0x0005, 0x0007, 0x0008,
        0x0009, 0x0005, 0x000a, 0x0005, 0x000b, 0x000b, 0x000c, 0xffff, 0x0004, 0x000d, 0xffff, 0xffff,
        0xffff, 0xffff, 0x000e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000f, 0xffff, 0x0010,
        0x000d, 0xffff, 0x0011, 0x0012, 0xffff, 0x0013, 0x000b, 0x0000, 0x0014, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0015, 0x0016, 0x0017, 0x0018, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0019, 0x001a, 0xffff, 0xffff, 0xffff, 0xffff, 0x001b, 0x001c, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x001e, 0xffff, 0xffff, 0x001f, 0x0020, 0x0021, 0xffff, 0xffff, 0x0022, 0x0023, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0024, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0025, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0026, 0x0027, 0x0028, 0xffff, 0xffff, 0xffff, 0x0029, 0xffff, 0xffff, 0xffff, 0x002a, 0x002b,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002c, 0xffff, 0xffff, 0xffff, 0x002d, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002e, 0x002f, 0x0030, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0031, 0x0032, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0033, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0034, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0035, 0xffff, 0xffff, 0xffff, 0xffff, 0x0036, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0037, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0038, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0039, 0x003a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x003b, 0x003c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x003d, 0x003e, 0xffff, 0xffff,
        0x003f, 0x000b, 0x0040, 0x0041, 0x000b, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0042, 0x0043, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000d, 0xffff, 0xffff, 0xffff, 0x0044, 0x0045,
        0xffff, 0x0046, 0x0047, 0x0048, 0xffff, 0x003d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0049, 0x004a, 0x004b, 0x004c, 0x004d, 0x004e, 0x004f, 0x0050, 0xffff, 0x0051, 0x0000, 0xffff,
        0x0052, 0xffff, 0x0053, 0x0054, 0x0055, 0x0003, 0x0056, 0x0057, 0xffff, 0x0003, 0xffff, 0xffff,
        0x000b, 0x000b, 0xffff, 0xffff, 0x000b, 0x0004, 0x0058, 0xffff, 0xffff, 0x0059, 0x000b, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x005a, 0xffff, 0x000b, 0x003d, 0xffff, 0xffff, 0xffff, 0x005b,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x005c, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0004, 0x005d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x005e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x005f, 0x0060, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0061, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0004, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0062, 0x000b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0063, 0x0064, 0x0065, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0066, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0067, 0x0068, 0x0069, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x006a, 0x006b,
        0xffff, 0x006c, 0x006d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x006e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x006f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0070, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0071, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0072, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x2a090000, 0xaad52a75, 0xcd62af56, 0x000001aa, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00053278, 0x00000000, 0xb000012c, 0x0020cde5,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x2a752a09, 0xaf56aad5, 0x01aacd62,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x2a090000, 0xaad52a75, 0xcd62af56, 0x000001aa, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x2a752a09, 0xaf56aad5, 0x01aacd62, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x82400000, 0xb54a9d4a,
        0x58abd5aa, 0x00006ab3, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x82400000, 0xb54a9d4a,
        0x58abd5aa, 0x00006ab3, 0x63300000, 0x832d94c8, 0x000001c6, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x82400000, 0xb54a9d4a,
        0x58abd5aa, 0x00006ab3, 0x6833796c, 0x002990c6, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x82400000, 0xb54a9d4a,
        0x58abd5aa, 0x26db6ab3, 0x000004de, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x82400000, 0xb54a9d4a,
        0x58abd5aa, 0x00006ab3, 0x00000000, 0x0b000000, 0x753a7d2e, 0x0029d3e9,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x13000000, 0xb1789c3e, 0x0015c963, 0x00000000, 0x82400000, 0xb54a9d4a,
        0x58abd5aa, 0x26db6ab3, 0x66f2dcde, 0x53218cd0, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x000001aa, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x2a752a09, 0xaf56aad5, 0xbdaacd62,
        0xd56a34d9, 0x96c35dac, 0x00003b4d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x000001aa, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x792c0000,
        0x96cae532, 0xacce632f, 0x6f375b6d, 0x0781bfdf, 0xb89c3e17, 0x00000015,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xc0000000, 0x000301b9, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x2a752a09, 0xaf56aad5, 0x01aacd62,
        0x00000000, 0x2e0b0000, 0xeaf53a7d, 0xcf63afd6, 0x000001ae, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x82400000, 0xb54a9d4a, 0x58abd5aa, 0x00006ab3, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x000259aa, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x2a752a09, 0xaf56aad5, 0x01aacd62, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x000001aa, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x2a752a09, 0xaf56aad5, 0x01aacd62, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x000001aa, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x000a0000, 0xcae00000, 0xce632f96, 0x000001ac, 0x00000000,
        0x32792c0a, 0x2f96cae5, 0x01acce63, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x7e470000, 0xe7f2f8ec,
        0x873b99ca, 0x321a2c9e, 0x4ba3cf66, 0x7a9d3e97, 0xb1d7eb75, 0x7db6d767,
        0xe26ff01b, 0x3e979bc8, 0xeb757a9d, 0xd767b1d7, 0xf01b7db6, 0x9bc8e26f,
        0x056e8f37, 0xbfd7e000, 0x00177fb5, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x72993c96, 0x3197cb65, 0x7db6d667,
        0xc060301b, 0x06e77180, 0xc967580c, 0xb6572993, 0x6673197c, 0x01b7db6d,
        0x180c0603, 0x80c06e77, 0x993c9675, 0x97cb6572, 0xb6d66731, 0x60301b7d,
        0xe77180c0, 0x07580c06, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x28000000,
        0xc06036f8, 0xcee30180, 0xceb0180d, 0xae532792, 0xe632f96c, 0x0536dacc,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xa64f2580, 0x65f2d95c, 0x6db599cc,
        0x72993c96, 0x3197cb65, 0x59b6d667, 0x95ca64f2, 0x9cc65f2d, 0x0006db59,
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
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000de0,
        0x00000000, 0x80000000, 0x00000005, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3a7d2e00, 0xafd6eaf5, 0x01aecf63,
        0x00000000, 0x00000000, 0x00000000, 0xdb000000, 0x0003cdd6, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xea74fa5c,
        0x00000015, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x7a9d3e97, 0xb1d7eb75, 0x01b6d767,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xcdd6db00, 0xe06ff7db, 0xde0085c1, 0x6030180d,
        0x030180c0, 0x301bcc06, 0x0180c060, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x7a9d3e97, 0xb1d7eb75, 0x01b6d767, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xee000000, 0x6030180d, 0x030180df, 0x30180c06, 0x7f80c060,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x0016e000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xf8000000, 0x00000004, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xdc000000,
        0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x18e00000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x38000097, 0x80000006, 0x014e00ad, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00001ae0, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0009f000, 0x00000000, 0x0b700000,
        0x00002bc0, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xdb800000,
        0x000000db, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x9b800000, 0x00000000, 0x00000000, 0x0000a700,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x16e00000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x01130000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00001b70, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x6fc00000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x013e0000,
        0x17e00678, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xb801b600, 0x001e6eb9, 0x00000000, 0x000fb000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x3a9d4e00, 0x00000a75, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x05780000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x2e000000, 0x00000001, 0x00000000, 0x0000012e, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00025c00, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x75b5c000,
        0x00000000, 0x00000000, 0x00000000, 0xd3e97000, 0x009f0029, 0x00000000,
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
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0036c000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x000cf000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000031c,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x31c00000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x000035c0, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0044c000,
        0x00000000, 0x2bc00000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0015b000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xc0000000, 0x00000027, 0x0004f800, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x009f0000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00026e00, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x2fc00000, 0x00000000, 0x00113000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xbf000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x000002c0, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x2a752a09, 0xaf56aad5, 0x01aacd62,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xa5c00000, 0xdd5ea74f,
        0xd9ec75fa, 0x000005b5, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xde5b0000, 0x64319a0c, 0x0000000a, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x2a752a09, 0xaf56aad5, 0x01aacd62, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x000001aa, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x2a090000, 0xaad52a75, 0xcd62af56, 0x000001aa, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000538, 0x00000000, 0x0006d800, 0x9f000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x0000002c, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x7e000000, 0x0005f801,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00001b60,
        0x00000000, 0x80000000, 0xbd4e9f4b, 0xd8ebf5ba, 0xd6db6bb3, 0x6ff7dbcd,
        0x0f85c1e0, 0xf8dc5e27, 0x95c9e471, 0xdcde672f, 0xd1e873f9, 0x5ea74fa5,
        0xec75fadd, 0xe76fb5d9, 0x000bddde, 0x00000000, 0x00000000, 0x00000000,
        0xba5cde5b, 0xd1e46ff5, 0xfdb6b7b5, 0xe6f2389b, 0xfedb5bd1, 0x73791c4d,
        0x976ddaeb, 0xf4fa5d2e, 0x5ba7d3e9, 0xdb6db6db, 0xbfde6db6, 0x4dfeff7f,
        0xe47238dc, 0x6f2391c8, 0xeff5bd1e, 0x833f9bcd, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x2c000000, 0x000002d8, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3a7d2e00, 0xafd6eaf5, 0x6daecf63,
        0xdf6f375b, 0x170781bf, 0x71789c3e, 0x2791c7e3, 0x099cbe57, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xfb6d6e97, 0x00000007, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00021e00, 0x00000000, 0xcc000000, 0x00000004, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2e000000, 0x6eb6da7d,
        0x00000022, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x97000000, 0xb6da9d3e, 0xadcde26e, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xf53a7d2e, 0x75b6d6ea,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000, 0xbd4e9f4b,
        0xdb6b757a, 0x000089ba, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x74b80000, 0x89badb6b,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xeb6da5c0, 0x053a7e26, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x30000000, 0x00000de9,
        0x7a9d3e97, 0xb1d7eb75, 0xadb6d767, 0xdfefb79b, 0x000083c0, 0xf1b8bc4c,
        0x2b93c8e3, 0xb9bcce5f, 0xa3d0e7f3, 0xbd4e9f4b, 0xd8ebf5ba, 0xcedf6bb3,
        0xeff7bbbd, 0x2f8fc5e0, 0xfa3cfe6f, 0x5b278df4, 0x3379acbe, 0x45a0cfe7,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x72993c96, 0xc4dd6db5, 0x00006f9b, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x003fd2e0,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x75b6d2e0, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xdb6b74b8, 0x000089ba, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x97000000, 0xb57a9d3e, 0x9bc4dd6d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x97000000, 0xb57a9d3e, 0x9bc4dd6d,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x7d2e0000,
        0xdb6af53a, 0x000089ba, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xb5ba5c00, 0x9bc4dfed,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x72993c96, 0x3197cb65, 0xadb6d667,
        0xdfefb79b, 0x1f0b83c0, 0xf1b8bc4e, 0x2b93c8e3, 0xb37cce5f, 0x001fcbe5,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x53a7d2e0, 0x5b6d6eaf, 0x1be26f37, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2e000000, 0x11375b6d,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xa7d2e000, 0xadb6af53, 0x0000089b, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xca64f258,
        0xc65f2d95, 0xb6db599c, 0x7fbede6e, 0x7c2e0f03, 0x8266f138, 0xb54a9d4a,
        0x58abd5aa, 0x00006ab3, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x9d4a8240, 0xd5aab54a, 0x6ab358ab,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x000001aa, 0x00000000, 0x3a7d2e00, 0xafd6eaf5, 0x6daecf63,
        0xdf6f375b, 0x170781bf, 0x13789c3e, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x2a090000, 0xaad52a75, 0xcd62af56, 0x075b6daa, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x2a752a09, 0xaf56aad5, 0x6daacd62,
        0xdf6f375b, 0x170781bf, 0x0000043e, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x74fa5daa, 0x5fadd5ea, 0xdb5d9ec7, 0xbede6eb6, 0x2e0f037f,
        0x0011387c, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xd85c260f, 0x89c461f0, 0xcc662f15, 0xc96431d8, 0xde5b2b94, 0x00f419bc,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xbabd4e9f, 0xb3d8ebf5, 0xdd5ea76b, 0xd9ec75fa, 0x7eb757b5, 0xed767b1d,
        0xaf53a7d2, 0xf63afd6e, 0x4fa5daec, 0xfadd5ea7, 0xabd4ea74, 0x3d8ebf5b,
        0xd3e976bb, 0x6eaf53a9, 0xe97c9e1d, 0xaf53a9d3, 0xf53a9d6e, 0x57abd5ea,
        0x3b1d8ebf, 0xb5d9ecf6, 0x7daed76b, 0xd6eaf53a, 0x4e9f4baf, 0xeb757abd,
        0x9753a7d6, 0xb3f97d3e, 0x219fcbe8, 0xd96c9e5b, 0x9fcbe6f2, 0xdd5eff7d,
        0xd9ec75fa, 0x00000035, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x2a090000, 0xaad52a75,
        0xcd62af56, 0x36d801aa, 0xdbeaeb71, 0x00037fbb, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x3a7d2e0b, 0xafd6eaf5, 0x6daecf63, 0xc06036fb, 0xcee30180, 0xe970180d,
        0x000029d3, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3a7d2e0b, 0xafd6eaf5, 0x6daecf63,
        0xc06036fb, 0xcee30180, 0x0000180d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x7a9d3e97, 0xb1d7eb75, 0xadb6d767,
        0xdfefb79b, 0x1f0b83c0, 0xea74fa5e, 0xb74badd5, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x40000000, 0x4a9d4a82, 0xabd5aab5,
        0x096ab358, 0xd52a752a, 0x62af56aa, 0xa825aacd, 0xab54a9d4, 0x358abd5a,
        0x52a096ab, 0x6aad52a7, 0xacd62af5, 0x9d4a825a, 0xd5aab54a, 0x6ab358ab,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x80000000, 0xbd4e9f4b, 0xd8ebf5ba, 0x00006bb3, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x2e000000, 0xeaf53a7d, 0xcf63afd6, 0x375b6dae, 0x81bfdf6f,
        0x9c3e1707, 0xc7e37178, 0xbe572791, 0xe773799c, 0x9747a1cf, 0x757a9d3e,
        0x67b1d7eb, 0x7b9dbed7, 0xc1dfef77, 0xbecf5f7f, 0xabd4e9f4, 0x3d8ebf5b,
        0xcb6006bb, 0x2e00419b, 0x17fada7d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x3a7d2e00, 0xafd6eaf5, 0x6daecf63, 0xdf6f375b, 0x170781bf, 0x71789c3e,
        0x2791c7e3, 0x799cbe57, 0xa1cfe773, 0x9d3e9747, 0xd7eb757a, 0xbed767b1,
        0x2f777b9d, 0x5ea74f80, 0xec75fadd, 0x1f6db5d9, 0xfadcee4f, 0x000009e6,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xf258140a, 0x2d95ca64, 0x599cc65f, 0x0000b05b, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00018e00, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000af0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x02bc0000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00016e00, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x5c000000,
        0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x98000000, 0x00000007, 0x00000000, 0x000fb000, 0x00000000, 0x00000000,
        0x00000000, 0xb0000000, 0x0000000f, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfc000000,
        0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x000014e0,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x0000014e, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x009f0000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xa7000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x05380000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x15e00000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00d70000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 9,
    default: 0,
};

pub(crate) static NUMERIC_VALUES: [(i64, i32); 112] = [
    (0, 0),
    (-1, 2),
    (0, 1),
    (1, 320),
    (1, 160),
    (1, 80),
    (1, 64),
    (1, 40),
    (1, 32),
    (3, 80),
    (3, 64),
    (1, 20),
    (1, 16),
    (1, 12),
    (1, 10),
    (1, 9),
    (1, 8),
    (1, 7),
    (3, 20),
    (1, 6),
    (3, 16),
    (1, 5),
    (1, 4),
    (1, 3),
    (3, 8),
    (2, 5),
    (5, 12),
    (1, 2),
    (7, 12),
    (3, 5),
    (5, 8),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 6),
    (7, 8),
    (11, 12),
    (1, 1),
    (3, 2),
    (2, 1),
    (5, 2),
    (3, 1),
    (7, 2),
    (4, 1),
    (9, 2),
    (5, 1),
    (11, 2),
    (6, 1),
    (13, 2),
    (7, 1),
    (15, 2),
    (8, 1),
    (17, 2),
    (9, 1),
    (10, 1),
    (11, 1),
    (16, 1),
    (17, 1),
    (20, 1),
    (21, 1),
    (30, 1),
    (36, 1),
    (40, 1),
    (50, 1),
    (60, 1),
    (70, 1),
    (80, 1),
    (90, 1),
    (100, 1),
    (200, 1),
    (300, 1),
    (400, 1),
    (500, 1),
    (600, 1),
    (700, 1),
    (800, 1),
    (900, 1),
    (1000, 1),
    (2000, 1),
    (3000, 1),
    (4000, 1),
    (5000, 1),
    (6000, 1),
    (7000, 1),
    (8000, 1),
    (9000, 1),
    (10000, 1),
    (20000, 1),
    (30000, 1),
    (40000, 1),
    (50000, 1),
    (60000, 1),
    (70000, 1),
    (80000, 1),
    (90000, 1),
    (100000, 1),
    (200000, 1),
    (216000, 1),
    (300000, 1),
    (400000, 1),
    (432000, 1),
    (500000, 1),
    (600000, 1),
    (700000, 1),
    (800000, 1),
    (900000, 1),
    (1000000, 1),
    (10000000, 1),
    (20000000, 1),
    (100000000, 1),
    (10000000000, 1),
    (1000000000000, 1),
];

pub(crate) static MIRROR: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0x0005, 0xffff, 0xffff, 0x0006, 0x0007, 0x0008, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0009, 0x000a, 0xffff, 0xffff, 0xffff, 0x000b,
        0x000c, 0x000d, 0xffff, 0x000e, 0xffff, 0xffff, 0xffff, 0xffff, 0x000f, 0xffff, 0xffff, 0xffff,
        0x0010, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0011, 0xffff, 0x0012, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000002, 0x0000fffe, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00020000, 0xfffe0000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00020000, 0xfffe0000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00100000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xfff00000, 0x00000000, 0x00000000,
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
        0x00000000, 0xffff0001, 0xffff0001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00010000, 0x0000ffff, 0x00000000, 0x00000000, 0x00000000,
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
        0x00000000, 0x00000000, 0x00010000, 0x0000ffff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00010000, 0x0000ffff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00010000, 0x0000ffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00010000, 0x0000ffff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00030003, 0xfffd0003,
        0xfffdfffd, 0x00000000, 0x00000000, 0x00000000, 0x07e00000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x09df0000, 0x077a0783, 0x0000077e,
        0x000008ca, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffff0001, 0x00000000, 0x00000000, 0x008a0000, 0x00070000, 0x00000000,
        0x00000000, 0x00000000, 0x0000fff9, 0x00000000, 0x00000000, 0xffff0001,
        0xffff0001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001,
        0x00000000, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001,
        0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001,
        0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0x00000000, 0x00010000,
        0x0001ffff, 0x0000ffff, 0x00000000, 0x00000000, 0x00000720, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xffff0001, 0x00000000, 0x00000838,
        0x083a083c, 0x083a0000, 0x00000000, 0x00000000, 0xffff0001, 0xffff0001,
        0xffff0001, 0xffff0001, 0x00000524, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00010000, 0x0001ffff,
        0xff76ffff, 0x00000000, 0xffff0001, 0x00000000, 0x00000000, 0xffff0001,
        0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001,
        0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0x00000000,
        0xffff0001, 0x00080008, 0x00000008, 0x00070007, 0x00000000, 0xfff8fff8,
        0xfff9fff8, 0x0000fff9, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffff0001, 0xffff0001, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00010000, 0x0000ffff,
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
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffff0001, 0xffff0001,
        0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00010000, 0x0001ffff, 0x0000ffff, 0xffff0001, 0x00020000,
        0xfffe0000, 0x00000000, 0x00000000, 0x00000000, 0x00010000, 0x0000ffff,
        0x00000000, 0x00000000, 0x0001fadc, 0x0000ffff, 0x00000000, 0xffff0001,
        0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00010000, 0x0001ffff, 0x0001ffff,
        0x0001ffff, 0x0001ffff, 0x0003ffff, 0xffff0001, 0x0001fffd, 0x0001ffff,
        0x0001ffff, 0x0001ffff, 0x0000ffff, 0xf8860000, 0x00000000, 0x00000000,
        0x0000f882, 0xf87d0000, 0xffff0001, 0x00000000, 0xffff0001, 0xffff0001,
        0xffff0001, 0xffff0001, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0000f8e0, 0x00000000, 0x00000000, 0x00000000, 0xffff0001, 0x00000000,
        0xffff0001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00010000,
        0x0001ffff, 0x0000ffff, 0xffff0001, 0x00000000, 0xffff0001, 0xffff0001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffff0001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xf8200000, 0x00000000, 0xffff0001, 0x00000000, 0xffff0001, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00010000, 0x0001ffff, 0x0000ffff,
        0x00000000, 0x00000000, 0xffff0001, 0x00000000, 0x00000000, 0x00000000,
        0xffff0001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00010000, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff,
        0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff,
        0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff,
        0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0000ffff, 0x00000000, 0xffff0001,
        0xffff0001, 0xffff0001, 0xffff0001, 0x00010000, 0x0001ffff, 0x0001ffff,
        0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff,
        0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff,
        0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0000ffff,
        0x00000000, 0x00000000, 0x00000000, 0x0000f7c8, 0x00000000, 0xf7c60000,
        0xf7c6f7c4, 0x00000000, 0x00000000, 0x00000000, 0xffff0001, 0x0000f736,
        0x00000000, 0x00000000, 0x00000000, 0x00010000, 0x0001ffff, 0x0000ffff,
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
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000f621,
        0x00000000, 0xffff0001, 0xffff0001, 0x00000000, 0x00010000, 0x0000ffff,
        0xffff0001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0001, 0x00000000, 0xffff0001, 0xffff0001,
        0xffff0001, 0xffff0001, 0xffff0001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00010000, 0x0001ffff, 0x0001ffff, 0x0001ffff, 0x0000ffff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001,
        0xffff0001, 0x00000000, 0xffff0001, 0xffff0001, 0xffff0001, 0xffff0001,
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
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00010000, 0x0001ffff,
        0x0001ffff, 0x0000ffff, 0x00000000, 0x00000000, 0xffff0001, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffff0001, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000002, 0x0000fffe, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00020000,
        0xfffe0000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00020000, 0xfffe0000, 0x00010000,
        0x0000ffff, 0xffff0001, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 16,
    default: 0,
};

pub(crate) static GRAPHEME_BREAK: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0002, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0x0003, 0xffff, 0x0004,
        0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010,
        0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c,
        0xffff, 0xffff, 0x001d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001e, 0x001f,
        0x0020, 0x0021, 0x0022, 0xffff, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027, 0x0028, 0xffff, 0x0029,
        0xffff, 0xffff, 0xffff, 0xffff, 0x002a, 0x002b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002c, 0x002d, 0x002e, 0xffff, 0xffff, 0xffff, 0xffff,
        0x002f, 0x0030, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0031, 0x0032, 0xffff, 0xffff,
        0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0xffff, 0x0039, 0x003a, 0x003b, 0x003c, 0x003d,
        0x003e, 0x003f, 0x0040, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x003a, 0x003b,
        0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040,
        0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e,
        0x003f, 0x0040, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x003a, 0x003b, 0x003c,
        0x003d, 0x003e, 0x003f, 0x0040, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x003a,
        0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f,
        0x0040, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x003a, 0x003b, 0x003c, 0x0041,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0042, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0043, 0x0044, 0xffff, 0x0045, 0xffff, 0xffff, 0xffff, 0x0046,
        0xffff, 0x0047, 0x0048, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0049, 0x004a, 0xffff, 0xffff, 0xffff, 0xffff, 0x004b, 0xffff,
        0xffff, 0x004c, 0x004d, 0x004e, 0x004f, 0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0xffff,
        0x0056, 0x0057, 0xffff, 0x0058, 0x0059, 0x005a, 0x005b, 0xffff, 0x005c, 0xffff, 0x005d, 0x005e,
        0x005f, 0x0060, 0xffff, 0xffff, 0x0061, 0x0062, 0x0063, 0x0064, 0xffff, 0x0065, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0066, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0067, 0x0068, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0069, 0x006a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0x006b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x006c, 0xffff, 0xffff, 0xffff, 0x006d, 0x006e, 0x006f, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0070, 0x0071, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0072, 0xffff, 0x0068, 0xffff, 0xffff, 0x0073, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0074, 0x0075, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0076,
        0xffff, 0xffff, 0xffff, 0x0077, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0078, 0x0079, 0x007a, 0x007b, 0x0079, 0x0079, 0x0079, 0x0079,
        0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079,
        0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079, 0x0079,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0xc6318c63, 0x31886318, 0x8c6318c2, 0x6318c631, 0x18c6318c, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x18000000, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0x00000000, 0x00000000, 0x00000006, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x00002108, 0x00000000, 0x00000000,
        0x08420000, 0x00008421, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10800000, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x20084210,
        0x08401080, 0x00000020, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0a5294a5, 0x00000000,
        0x10840000, 0x84210842, 0x00003010, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x42000000, 0x10842108, 0x84210842,
        0x21084210, 0x00000000, 0x00000000, 0x00040000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x84210000, 0x200a4210, 0x00421084, 0x42100420, 0x00000008,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00802800, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x10840000, 0x84210842, 0x21084210,
        0x08421084, 0x00108421, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x42108421, 0x00042108,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x42000000, 0x10842108, 0x00000002, 0x00080000,
        0x00000000, 0x00000000, 0x00000000, 0x84210000, 0x21084200, 0x08021084,
        0x42108021, 0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x80000000, 0x00000210, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00a50000, 0x84000000,
        0x21084210, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x42100000, 0x10842108, 0x84210842, 0x21084210, 0x08421484,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x00031084, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x31804310, 0x08421086, 0x6318c421, 0x10803188, 0x00210842,
        0x00000000, 0x00021000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00031880, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x31004000, 0x00421086, 0x63000630,
        0x00000008, 0x00200000, 0x00000000, 0x00021000, 0x00000000, 0x00000000,
        0x00000000, 0x01000000, 0x00031080, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x31804000,
        0x00001086, 0x42000420, 0x00800008, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00840000, 0x00000800, 0x00000000, 0x00031080, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x31804000, 0x08421086, 0x6300c420, 0x00000008, 0x00000000,
        0x00000000, 0x00021000, 0x00000000, 0x00000000, 0x00000000, 0x21084210,
        0x00031880, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x21004000, 0x00421086, 0x63000630,
        0x00000008, 0x00210800, 0x00000000, 0x00021000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00001000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x31000000,
        0x800018c4, 0x63180631, 0x00000008, 0x00200000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x004318c4, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x21004000, 0x006318c4, 0x42100421, 0x00000008, 0x00010800,
        0x00000000, 0x00021000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00031880, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x21804000, 0x006310c6, 0x43180631,
        0x00000008, 0x00010800, 0x00000000, 0x00021000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00031884, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x31004200,
        0x80421086, 0x63180631, 0x00000148, 0x00200000, 0x00000000, 0x00021000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00031880, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00100000, 0x10c62000, 0xc6010042,
        0x218c6318, 0x00000000, 0x00000000, 0x18000000, 0x00000003, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00800000, 0x84210843, 0x00000010, 0x00000000, 0x42108420,
        0x00000108, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00800000, 0x84210843, 0x00004210,
        0x00000000, 0x42108400, 0x00000008, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x84000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x80200800, 0x31800000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x10800000, 0x84210842, 0x31084210,
        0x00421084, 0x00000021, 0x10842108, 0x80210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x00004210, 0x00000000, 0x00000001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x10c42108, 0x80210842, 0x01086310,
        0x00000000, 0x00000000, 0x00000000, 0x84318000, 0x21000000, 0x00000004,
        0x00000000, 0x10800000, 0x00000042, 0x00000000, 0x08601000, 0x00000001,
        0x00000008, 0x00000000, 0x00080000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xce739ce7, 0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c, 0xce739ce7,
        0x739ce739, 0x9ce739ce, 0xe739ce73, 0x39ce739c, 0xce739ce7, 0x739ce739,
        0x9ce739ce, 0xe739ce73, 0x39ce739c, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x94a52942, 0xa5294a52, 0x294a5294, 0x4a5294a5,
        0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x5294a529,
        0x94a5294a, 0xa5294a52, 0x294a5294, 0x4a5294a5, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x21080000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x10000000, 0x00000c42, 0x00000000, 0x00000000,
        0x00000000, 0x10000000, 0x00000062, 0x00000000, 0x00000000, 0x00000000,
        0x10000000, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x10000000,
        0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84218840, 0x31884210,
        0x0c6318c6, 0x42108631, 0x10842108, 0x00000002, 0x00080000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x42000000,
        0x000020c8, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x08000000, 0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00008000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x8c631084, 0x0318c421, 0x10c60000, 0x86318c63, 0x00000210,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xc4200000, 0x00000218, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84310c00,
        0x01084210, 0x08001004, 0x42108421, 0x18c6318c, 0x84210842, 0x20004210,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x10840000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x00000108, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00621084, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210840, 0x318c4310,
        0x006310c6, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x42000000, 0x10842108, 0x00000002, 0x00000000, 0x00001884, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x884210c0, 0x42188431, 0x00000008,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x63188431, 0x18842188, 0x00000003, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x8c600000,
        0x4318c631, 0x10842108, 0x00210c62, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x10840000, 0x84210840, 0x21084210, 0x084210c4,
        0x00000421, 0x00000008, 0x84300040, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x00000000, 0x41800000, 0x000018da, 0x00000000, 0x00000000, 0x00000000,
        0x318c6300, 0x000000c6, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xc6318c63, 0x318c6318, 0x000018c6,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x10840000, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x00042108, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00842000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x42100000, 0x00002108,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x80000000, 0x00000010, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x10842000, 0x84210840, 0x00084210, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x21000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00840000, 0x00000000, 0x00000000,
        0x00001000, 0x02000001, 0x00000000, 0x00000000, 0x00000000, 0x08630000,
        0x40000031, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x000000c6, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xc6318c60, 0x318c6318,
        0x084318c6, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08421084,
        0x42108421, 0x00842108, 0x00000000, 0x20000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x42108421, 0x00000008,
        0x00000000, 0x00000000, 0x00000000, 0x42108420, 0x18842108, 0x00000003,
        0x00000000, 0xce739ce7, 0x739ce739, 0x9ce739ce, 0xe739ce73, 0x0000739c,
        0x00031084, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210c62, 0x31884318, 0x00000006, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x08000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x42108000, 0x10863108, 0x00010863, 0x00000000,
        0x00020000, 0x40000000, 0x0000000c, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00004000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10040000,
        0x04200042, 0x21000000, 0x00000080, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x43000000, 0x00003188, 0x00010c00, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x88630000, 0x6018c431, 0x00000008,
        0x00000000, 0x00000000, 0xd6b5ad6a, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6a5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6a5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6a5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6a5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xa5ad6b5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6a5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6a5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6a, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6a5ad,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6a5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6a5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6a5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xa5ad6b5a, 0xad6b5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6a5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6a5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6a, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6a5ad, 0xd6b5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6a5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6b5ad6a5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6a5ad6,
        0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xa5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6a5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6a5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6a,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6a5ad, 0xd6b5ad6b, 0xb5ad6b5a,
        0xad6b5ad6, 0x6a5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6,
        0x6b5ad6a5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6b5a, 0xad6a5ad6, 0x6b5ad6b5,
        0x5ad6b5ad, 0xd6b5ad6b, 0xa5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad,
        0xd6b5ad6b, 0xb5ad6a5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6a5ad6b,
        0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0xd6b5ad6b, 0xb5ad6a5a,
        0xad6b5ad6, 0x6b5ad6b5, 0x5ad6b5ad, 0x0005ad6b, 0x00000000, 0x21080000,
        0x08421084, 0x42108421, 0x10842108, 0x94800002, 0xa5294a52, 0x294a5294,
        0x4a5294a5, 0x5294a529, 0x94a5294a, 0xa5294a52, 0x294a5294, 0x000004a5,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x01000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x08421084, 0x42108421, 0x00002108, 0x00000000,
        0x00000000, 0x08421084, 0x42108421, 0x00002108, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x21000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x8c630000,
        0x6318c631, 0x0000018c, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00080000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000004, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210000, 0x00000010, 0x08021080, 0x40000001, 0x00002108, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84000000, 0x20000010,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x08000000, 0x00000001, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08400000,
        0x00000021, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x42000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x42108421, 0x00042108, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x08421000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00001886, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84000000, 0x21084210,
        0x08421084, 0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00040000, 0x00000042, 0x20000000, 0x00001884, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18c60000,
        0x86310842, 0x000a0010, 0x00001000, 0x00000000, 0x0000000a, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00001084, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x62108420, 0x10842108, 0x00000042, 0x00000000, 0x8c000000, 0x00000001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000002, 0x00000000, 0x00001884, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210c63, 0x31084210,
        0x00029406, 0x42108000, 0x00002180, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x60000000, 0x1884218c,
        0x00210c43, 0x01000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x20000000, 0x084218c6, 0x00108421, 0x00000000,
        0x00000000, 0x00000000, 0x00031884, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x31004200,
        0x006318c4, 0x63000630, 0x0000000c, 0x00200000, 0x00000000, 0x00031800,
        0x42108421, 0x10840000, 0x00000042, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84318c00, 0x21084210, 0x0c4210c6, 0x00000001, 0x00000000, 0x00000000,
        0x01000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x18c40000, 0xc4210842, 0x21886310, 0x000210c4, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x10c62000, 0xc6000842, 0x21884318,
        0x00000004, 0x00000000, 0x00000000, 0x00000000, 0x00084000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18c60000,
        0x84210842, 0x21886310, 0x00000004, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x62000000, 0x10843188, 0x00218842, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x21080000, 0x88421000, 0x02108421, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x60000000, 0x1084218c,
        0x86210842, 0x00000010, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x18c40000, 0x06300c63, 0x290c4200, 0x000218a6, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x18c00000, 0x00210843, 0x318c6210, 0x00600004,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08421080, 0x00108421,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xc4210842, 0x01084214, 0x00000000, 0x00000020, 0x10800000, 0x86310842,
        0x00000210, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x4a500000, 0x4210a529, 0x10842108, 0x84310842, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x10843000, 0x84010842, 0x21884210,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x10000000, 0x84210842, 0x21084210, 0x08421084, 0x4210c021, 0x10c42108,
        0x00010862, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x10800000, 0x00010842, 0x20084010, 0x48421084, 0x00000021,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x63180000, 0x0084018c, 0x00218863,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00018c42, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x8c630000, 0x0318c631, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x10840000, 0x00000042, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10840000,
        0x00010842, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x18c02000, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x00000031, 0x10842000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00400000,
        0x00000000, 0x00c60000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x01080000, 0x00018c63, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10840008, 0x84210842, 0x21084210, 0x08421084, 0x00000001,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x88000000,
        0x00008421, 0x9084210c, 0x6318c631, 0x2108420c, 0x08001084, 0x02108421,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x42100000, 0x00000008,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00421000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x00010842, 0x21084200,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x00000000, 0x00000800, 0x00000000, 0x00400000, 0x00000000,
        0x00000000, 0x00000000, 0x21084200, 0x08421080, 0x42108421, 0x00002108,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x08421084, 0x42108401, 0x10842108, 0x04210842, 0x21084200, 0x00420084,
        0x00108421, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000100, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x40000000, 0x00002108, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10840000, 0x00010842,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08400000, 0x00108421,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x21084200,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631,
        0x18c6318c, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0xc6318c63,
        0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x8c632108,
        0x6318c631, 0x18c6318c, 0x00000000,
    ],
    bits: 5,
    default: 0,
};

pub(crate) static WORD_BREAK: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0002, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0005, 0x0002, 0x0006, 0x0007, 0x0008,
        0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014,
        0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x0002, 0x0002,
        0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x0002, 0x0002, 0x0002, 0x0024, 0x0025, 0x0026, 0x0027,
        0x0028, 0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0002, 0x0032,
        0x0002, 0x0002, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0039, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x003a, 0x003b, 0x003c, 0x003d, 0xffff, 0xffff, 0xffff,
        0x003e, 0x003f, 0x0040, 0x0041, 0xffff, 0x0042, 0x0043, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0044, 0x0002, 0x0002, 0x0045, 0x0046, 0x0047, 0x0048,
        0x0049, 0x004a, 0x004b, 0x004c, 0x004d, 0x004e, 0x004f, 0x0050, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0051,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0052, 0x0053,
        0x0002, 0x0002, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005a, 0x005b, 0x005c, 0x005d,
        0xffff, 0x005e, 0x005f, 0x0060, 0x0002, 0x0061, 0x0062, 0x0063, 0x0002, 0x0002, 0x0064, 0x0065,
        0x0066, 0x0067, 0x0068, 0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0x006e, 0x006f, 0x0070, 0xffff,
        0xffff, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007a, 0xffff,
        0x007b, 0x007c, 0xffff, 0x007d, 0x007e, 0x007f, 0x0080, 0xffff, 0x0081, 0x0082, 0x0083, 0x0084,
        0x0085, 0x0086, 0xffff, 0xffff, 0x0087, 0x0088, 0x0089, 0x008a, 0xffff, 0x008b, 0xffff, 0x008c,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x008d, 0x008e, 0x0002, 0x008f, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0090, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0091, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0092, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0093, 0x0094, 0x0095, 0x0096, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0097, 0xffff, 0x0098, 0x0099, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x009a,
        0x009b, 0xffff, 0x009c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x009d, 0x009e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x009f, 0xffff, 0xffff, 0xffff, 0x00a0, 0x00a1, 0x00a2, 0xffff, 0xffff, 0xffff,
        0x00a3, 0x00a4, 0x00a5, 0x0002, 0x0002, 0x00a6, 0x00a7, 0x00a8, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00a9, 0x00aa, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00ab, 0xffff,
        0x00ac, 0xffff, 0x00ad, 0xffff, 0xffff, 0x00ae, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00af, 0x0002, 0x00b0, 0x00b1, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x00b2, 0x00b3, 0xffff, 0xffff, 0xffff, 0xffff, 0x00b4, 0x00b5,
        0xffff, 0xffff, 0xffff, 0x00b6, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00b7, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x00b8, 0xffff, 0x00b9, 0x00ba, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0xa5300000, 0x00000016, 0x00000000, 0x00000000, 0x00003816,
        0x50000078, 0x18c600c0, 0xc6318c63, 0x00000290, 0x84210840, 0x21084210,
        0x08421084, 0x42108421, 0x38000008, 0x84210840, 0x21084210, 0x08421084,
        0x42108421, 0x00000008, 0x14000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00080000, 0x00000012, 0x00200400, 0x00000008,
        0x84210842, 0x21084210, 0x08421084, 0x42008421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42008421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x00108421, 0x10800000, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x08424210, 0x00108021, 0x11442108, 0x80000000, 0x20084220,
        0x08421080, 0x42108421, 0x10842108, 0x84210042, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42100421, 0x10842108,
        0x10840042, 0x21090842, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08401084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x40008421, 0x20802108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x0008a210,
        0x21000000, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x40108421, 0x10802100, 0x00000040, 0x42100000, 0x10842108,
        0x84210842, 0x21084210, 0x00421084, 0x42108000, 0x00000041, 0x00000000,
        0x1294a529, 0x50000000, 0x2108000a, 0x08421084, 0x00009021, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x84084210,
        0x21084210, 0x08421084, 0x42108421, 0x8c6318c6, 0x5300c631, 0x08481080,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x08420401, 0x40128421, 0x84842108,
        0x84200840, 0x18c61090, 0xc6318c63, 0x10002108, 0x00000000, 0x00000000,
        0x09024800, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x21081084,
        0x08421084, 0x42108421, 0x10842108, 0x00210842, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x04210842,
        0x84210842, 0x00484210, 0x00000000, 0x00000000, 0x8c6318c6, 0x2108c631,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x84084210, 0x21084210,
        0x05000424, 0x00100008, 0x84210842, 0x21084210, 0x08421084, 0x08420421,
        0x42108409, 0x10242108, 0x84210242, 0x00000010, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x02108421, 0x00000421, 0x84210842,
        0x00084210, 0x08420000, 0x42108421, 0x10842108, 0x84210842, 0x21084010,
        0x01290084, 0x08000000, 0x42108421, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x84204210, 0x21084210, 0x08421084,
        0x42108421, 0x10842508, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x84242108, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x42048420, 0x10842108, 0x84210842,
        0x21024210, 0x42421084, 0x10842108, 0x80042042, 0x6318c631, 0x0840318c,
        0x42108421, 0x10842108, 0x84042102, 0x21084210, 0x00021000, 0x42108421,
        0x10842108, 0x84210842, 0x21080210, 0x08021084, 0x42108000, 0x42048000,
        0x00842108, 0x84000840, 0x00000090, 0x00400000, 0x10042000, 0x80042042,
        0x6318c631, 0x0042318c, 0x00000000, 0x02002000, 0x84042100, 0x00084210,
        0x00021000, 0x42108421, 0x10842108, 0x84210842, 0x21080210, 0x08021084,
        0x42008401, 0x42008000, 0x00002108, 0x84000840, 0x01000010, 0x40000000,
        0x00802108, 0x80000000, 0x6318c631, 0x0908318c, 0x00001021, 0x00000000,
        0x84042100, 0x21084210, 0x00421004, 0x42108421, 0x10842108, 0x84210842,
        0x21080210, 0x08021084, 0x42108401, 0x42048000, 0x10842108, 0x84010840,
        0x00020010, 0x00000000, 0x00000000, 0x80042042, 0x6318c631, 0x0000318c,
        0x40000000, 0x42108420, 0x84042100, 0x21084210, 0x00021000, 0x42108421,
        0x10842108, 0x84210842, 0x21080210, 0x08021084, 0x42108401, 0x42048000,
        0x00842108, 0x84000840, 0x00000010, 0x00421000, 0x10042000, 0x80042042,
        0x6318c631, 0x0040318c, 0x00000000, 0x00000000, 0x84012000, 0x00084210,
        0x08021080, 0x40000421, 0x10802008, 0x00210000, 0x00084200, 0x08421080,
        0x42108421, 0x42000000, 0x00002108, 0x84200842, 0x00020010, 0x00400000,
        0x00000000, 0x80000000, 0x6318c631, 0x0000318c, 0x00000000, 0x00000000,
        0x84842108, 0x21084210, 0x08021080, 0x42108421, 0x10842108, 0x84210842,
        0x21080210, 0x08421084, 0x42108421, 0x42048000, 0x00842108, 0x84200842,
        0x00000010, 0x42021000, 0x00040008, 0x80042042, 0x6318c631, 0x0000318c,
        0x00000000, 0x00000000, 0x84042102, 0x21084210, 0x08021080, 0x42108421,
        0x10842108, 0x84210842, 0x21080210, 0x08421084, 0x42108401, 0x42048000,
        0x00842108, 0x84200842, 0x00000010, 0x00021000, 0x00840000, 0x80042042,
        0x6318c631, 0x0840318c, 0x00000000, 0x00000000, 0x84242108, 0x21084210,
        0x08021080, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x42048408, 0x00842108, 0x84200842, 0x00000090, 0x00408420,
        0x10000000, 0x80042042, 0x6318c631, 0x0000318c, 0x00000000, 0x10842108,
        0x84042100, 0x21084210, 0x08421084, 0x00008421, 0x10842108, 0x84210842,
        0x21084210, 0x00421084, 0x42108421, 0x00040108, 0x84210842, 0x00200000,
        0x21084000, 0x08020084, 0x42108421, 0x80000000, 0x6318c631, 0x2000318c,
        0x00000004, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x01000000, 0x08421080, 0x00000021,
        0x00000000, 0x84210840, 0x18c60210, 0xc6318c63, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x01000000,
        0x08421080, 0x00008421, 0x00000000, 0x84210800, 0x18c60010, 0xc6318c63,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000002, 0x00000000, 0x00000000, 0x08000000, 0x00000001, 0x8c6318c6,
        0x0000c631, 0x00000000, 0x00401000, 0x42000001, 0x84210842, 0x21084010,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x21000000,
        0x08421084, 0x42108421, 0x00842108, 0x21084242, 0x21084210, 0x00421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x00008421,
        0x00000000, 0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84000000, 0x21084210,
        0x08421084, 0x02108421, 0x8c6318c6, 0x0000c631, 0x00000000, 0x08420000,
        0x42000001, 0x00842008, 0x84210840, 0x21000010, 0x00000084, 0x00000000,
        0x10842000, 0x84210842, 0x18c64010, 0xc6318c63, 0x00108420, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x04210842, 0x00000010,
        0x08420004, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842008, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21080210, 0x08420004, 0x02008421, 0x00042108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21080210,
        0x08420004, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08021084,
        0x42000421, 0x00842108, 0x04210802, 0x21084200, 0x08421084, 0x42008421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08021084, 0x42000421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x42100008, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x00001084, 0x00000000,
        0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42000421, 0x00042108, 0x84210840, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421000,
        0x42108421, 0x10842108, 0x84210856, 0x21084210, 0x08421084, 0x42108421,
        0x00000008, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x00084210, 0x08421080, 0x02108421, 0x00000000, 0x84210842, 0x21084210,
        0x20421084, 0x00001084, 0x10000000, 0x84210842, 0x21084210, 0x20421084,
        0x00000084, 0x00000000, 0x84210842, 0x21084210, 0x20421084, 0x00000004,
        0x00000000, 0x84210842, 0x21084210, 0x20021080, 0x00000004, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x08421080, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x00000004, 0x00100000, 0x8c6318c6, 0x0000c631, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x84000000, 0x18c64250, 0xc6318c63,
        0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x02108421, 0x00000000, 0x10210842, 0x21084212,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x00090210, 0x08420000,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x00000421, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x00842108, 0x10842108,
        0x04210842, 0x21080000, 0x08421084, 0x00000421, 0x80000000, 0x6318c631,
        0x0000318c, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x18c60000, 0xc6318c63, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x08408421, 0x00000421, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08421000,
        0x02108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x40008421,
        0x8c6318c6, 0x0000c631, 0x18c60000, 0xc6318c63, 0x00000000, 0x00000000,
        0x00000000, 0x21080000, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x00000210, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84842108, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x08421081, 0x42108421,
        0x84842108, 0x21084210, 0x18c60000, 0xc6318c63, 0x00000000, 0x00000000,
        0x84000000, 0x21084210, 0x00000004, 0x00000000, 0x84212108, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x10842102, 0x84210842, 0x18c61090,
        0xc6318c63, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x04210842, 0x84210842, 0x21084210, 0x00000004, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x10810842,
        0x84210842, 0x21084210, 0x00421084, 0x00000000, 0x8c6318c6, 0x0000c631,
        0x18c61084, 0xc6318c63, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x00042108, 0x84210842, 0x00000210, 0x08420000, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10840008,
        0x00000000, 0x00000000, 0x21080000, 0x08421080, 0x42108421, 0x10842108,
        0x21084842, 0x08421090, 0x08408481, 0x00000009, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x84210842, 0x21084210, 0x08421084, 0x42000421, 0x00042108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x04210842, 0x21084200,
        0x08420004, 0x40108421, 0x10040100, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x00042108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108021, 0x00802108,
        0x80210800, 0x21084210, 0x08420000, 0x42108001, 0x00000108, 0x84210842,
        0x21084210, 0x08000000, 0x42108021, 0x00002108, 0xad6b5ad6, 0x805ad605,
        0x00004a62, 0x63000000, 0x00000000, 0x00300000, 0x94a54a20, 0x00003a52,
        0x00000000, 0x38000000, 0x00500007, 0x00000000, 0x00000000, 0x00000070,
        0xb0000000, 0x4094a529, 0x94a5294a, 0x00404a52, 0x00000000, 0x10000000,
        0x00000000, 0x00000000, 0x08420000, 0x42108421, 0x00002108, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x21080000, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x00084210,
        0x00000000, 0x00000000, 0x00000800, 0x21080010, 0x08421084, 0x40000401,
        0x00042108, 0x80200000, 0x21080200, 0x08421004, 0x42108421, 0x10842000,
        0x84000000, 0x00004210, 0x00000080, 0x00000000, 0x00000000, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x00000210,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x42108000, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x00004210, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x00210842,
        0x21000000, 0x09084084, 0x00000001, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x04210842, 0x00000010, 0x08420004,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x00000010, 0x00001000, 0x00000000, 0x40000000,
        0x84210842, 0x21084210, 0x08421084, 0x00008421, 0x00000000, 0x84210842,
        0x21084200, 0x08420084, 0x42008421, 0x00842108, 0x84210842, 0x21084200,
        0x08420084, 0x42008421, 0x00842108, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00001000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04000016, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84200000, 0x84204210,
        0x00000210, 0x00002100, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x000010a1, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421004, 0x84000000, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08401084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x00000084, 0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x84210000, 0x21084210, 0x08421084,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210000, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x00421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x00084210, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08420000, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x00042108,
        0x84210842, 0x21084210, 0x08420000, 0x42108421, 0x10842108, 0x8c6318c6,
        0x0108c631, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x21084084,
        0x08421080, 0x10108421, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x42042108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x01081084, 0x00000000, 0x00000000, 0x00000000, 0x21084200,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x00084210,
        0x00420000, 0x42108401, 0x00000000, 0x00000000, 0x00000000, 0x08000000,
        0x42108421, 0x10842108, 0x04212042, 0x24084212, 0x08421084, 0x42108421,
        0x10842108, 0x10840842, 0x80000042, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x00000001, 0x00000000, 0x84210908, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x08421081, 0x42108421, 0x10842108, 0x00000000, 0x18c60000, 0xc6318c63,
        0x00000000, 0x10842108, 0x84210842, 0x09084210, 0x00108421, 0x40840100,
        0x8c6318c6, 0x2108c631, 0x08421084, 0x42108421, 0x10842108, 0x04210842,
        0x84210842, 0x08420010, 0x42108421, 0x10842108, 0x84210842, 0x84210840,
        0x21084210, 0x00000004, 0x00000000, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x00002108, 0x84242108, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x08421084, 0x42108421,
        0x00000008, 0x00000000, 0x18c61000, 0xc6318c63, 0x00000000, 0x10000000,
        0x00000000, 0x18c60000, 0xc6318c63, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x84210210, 0x21084210,
        0x00021084, 0x00000000, 0x84240842, 0x81084210, 0x18c60010, 0xc6318c63,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00108400,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x20080000, 0x08400084, 0x42000000, 0x00000100, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x84084210, 0x08004210,
        0x00021021, 0x00000000, 0x84210840, 0x21084000, 0x08400084, 0x00008421,
        0x00000000, 0x84210842, 0x21084200, 0x08420084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x00004210, 0x08420000, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x10840842, 0x80210842, 0x18c60010, 0xc6318c63, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x00010842,
        0x00000000, 0x08420000, 0x42108421, 0x10842108, 0x84210842, 0x21000000,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x00000108, 0x84210842, 0x00000000, 0x00000000, 0x00108421,
        0x82200000, 0x21084210, 0x08401084, 0x42108421, 0x10042108, 0x04010842,
        0x01080210, 0x08421084, 0x08428421, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x00421084,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x00042108, 0x00000000, 0x00000000,
        0x08420000, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08001084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x00000010, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x08420000, 0x42108421, 0x00000108, 0x10842108, 0x84210842,
        0x00054210, 0x00000052, 0x00000000, 0x10842108, 0x84210842, 0x80004210,
        0x00000073, 0x00000000, 0x00000000, 0x00000000, 0x0c0539ce, 0x00000850,
        0x00000000, 0x00000000, 0x00000000, 0x08420000, 0x42108021, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x48002108, 0x00000000, 0x50000018, 0x18c600c0, 0xc6318c63,
        0x00000290, 0x84210840, 0x21084210, 0x08421084, 0x42108421, 0x38000008,
        0x84210840, 0x21084210, 0x08421084, 0x42108421, 0x00000008, 0x40000000,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x42021084, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x00842108, 0x84210800, 0x21080010, 0x08001084, 0x00108421,
        0x00002108, 0x00000000, 0x00000000, 0x00000000, 0x20000000, 0x000004a5,
        0x84210842, 0x01084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084200, 0x08421084, 0x42108421, 0x10042008, 0x84210842, 0x21084210,
        0x08420004, 0x42108421, 0x00042108, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x00000008, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x00000021, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00100000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x00002108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x00021084, 0x00000000, 0x00000000, 0x00000008,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x00000000, 0x00000000, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x00084210, 0x08420000, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x08420421, 0x00000021,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x00042108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x00010842, 0x21084200,
        0x08401084, 0x00000421, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x00042108, 0x8c6318c6, 0x0000c631, 0x08420000, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42000001, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x00000108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x00000010, 0x08420000,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x00010842, 0x00000000, 0x08420000, 0x42108421, 0x10842008,
        0x84210842, 0x20084210, 0x08421084, 0x42100420, 0x10842108, 0x84210042,
        0x21084210, 0x00421084, 0x42108421, 0x00002100, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x00008421, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x00000421, 0x00000000, 0x84210842,
        0x00000010, 0x00000000, 0x00000000, 0x00000000, 0x04210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08021084,
        0x42108421, 0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x04210842, 0x21080200, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x02100421, 0x10002000, 0x84210842, 0x21084210,
        0x08421084, 0x00000421, 0x00000000, 0x84210842, 0x21084210, 0x08421084,
        0x00008421, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x00842108, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842,
        0x21084210, 0x08421084, 0x00000420, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x00000421, 0x00000000, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x00108421, 0x10800000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x10042102, 0x80000002, 0x08424210, 0x40108401,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x08000421, 0x40000021,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x00002108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x00002108, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084010, 0x08421084, 0x42108421,
        0x10842108, 0x10210842, 0x00000002, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x00000421, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x00000421, 0x00000000, 0x84210842, 0x21084210, 0x08421084,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x00421084, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x00000210, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x10810842, 0x00000042, 0x18c60000, 0xc6318c63, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x84004210, 0x00420000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x00002108, 0x00000000,
        0x00000010, 0x08420000, 0x42108421, 0x10842108, 0x04210842, 0x84210842,
        0x00084210, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08420000,
        0x42108421, 0x10842108, 0x10842042, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x08420000, 0x42108421, 0x10842108,
        0x00210842, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842,
        0x21084210, 0x08421084, 0x00008421, 0x00000000, 0x84212108, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x08108421, 0x42108421, 0x10842108, 0x00000002, 0x00000000, 0x00000000,
        0x00000000, 0x80000000, 0x6318c631, 0x0848318c, 0x00000484, 0x40000000,
        0x84212108, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x21081084, 0x08421084, 0x00120021, 0x00002000, 0x00000000,
        0x08420012, 0x42108421, 0x10842108, 0x84210842, 0x00000210, 0x18c60000,
        0xc6318c63, 0x00000000, 0x84212108, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x84210840, 0x21084210, 0xc6318084, 0x318c6318,
        0x10200000, 0x00000012, 0x08420000, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x00008004, 0x00000000, 0x84212108, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x08421084, 0x42108421, 0x00210848, 0x84210000, 0x18c64200, 0xc6318c63,
        0x00002008, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x00421084, 0x42108421, 0x10842108, 0x84210842,
        0x81084210, 0x21084210, 0x00421084, 0x02000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21080200, 0x08421004, 0x42108421,
        0x10042108, 0x84210842, 0x00000210, 0x08420000, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x40842108, 0x10842108,
        0x00210842, 0x18c60000, 0xc6318c63, 0x00000000, 0x84042108, 0x21084210,
        0x00021000, 0x42108421, 0x10842108, 0x84210842, 0x21080210, 0x08021084,
        0x42108401, 0x42048400, 0x00842108, 0x84000840, 0x00020010, 0x00400000,
        0x10840000, 0x00042042, 0x84210842, 0x21080000, 0x00000084, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x08421021, 0x42108421, 0x10842108, 0x00084212,
        0x18c60000, 0xc6318c63, 0x12000000, 0x00000042, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x21081084, 0x08421084, 0x42108421,
        0x04242108, 0x00000010, 0x18c60000, 0xc6318c63, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x21084084,
        0x08001084, 0x42108421, 0x00000008, 0x00000000, 0x00000000, 0x42000000,
        0x00108108, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x21081084, 0x08421084, 0x42108421, 0x00200008, 0x00000000,
        0x18c60000, 0xc6318c63, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x84084210, 0x21084210, 0x02421084, 0x00000000,
        0x8c6318c6, 0x0000c631, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x42100000, 0x10842108, 0x04210842, 0x18c60000,
        0xc6318c63, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x81084210, 0x21084210, 0x08421084, 0x00000021, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x8c6318c6,
        0x0000c631, 0x00000000, 0x00000000, 0x10000000, 0x84210842, 0x20004000,
        0x08421084, 0x42008401, 0x10842108, 0x84210842, 0x21084210, 0x21081084,
        0x08401084, 0x12108400, 0x00042048, 0x00000000, 0x18c60000, 0xc6318c63,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842,
        0x21080010, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x21021084, 0x00421084, 0x42108420, 0x00810048, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x10842102, 0x21210842, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x08421084, 0x02108409,
        0x00000000, 0x00000040, 0x21020000, 0x08421084, 0x10842421, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x84204210,
        0x21084210, 0x08421084, 0x00040001, 0x00000000, 0x00000000, 0x08420000,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x02108421, 0x00000000,
        0x84210842, 0x21080210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x21084084, 0x08021084, 0x42108421, 0x00000002, 0x00000000,
        0x18c60000, 0xc6318c63, 0x00000000, 0x00000000, 0x00000000, 0x08000000,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x20001084, 0x08421084,
        0x42108421, 0x10842108, 0x84210042, 0x21084210, 0x00021084, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21004200,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x21021084,
        0x00021084, 0x40108020, 0x90842108, 0x00000040, 0x18c60000, 0xc6318c63,
        0x00000000, 0x04210842, 0x21080210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x84204210, 0x01080210, 0x02421084, 0x00000000, 0x8c6318c6,
        0x0000c631, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842,
        0x21084210, 0x08421084, 0x00021084, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00020000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x00000084, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x00010842, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x08420000, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x00021084,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0xa5290084, 0x094a5294, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x02108421, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x00842108, 0x8c6318c6, 0x0000c631, 0x08420000,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x00842108,
        0x8c6318c6, 0x0000c631, 0x08420000, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x21080004, 0x00000084, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x21081084,
        0x00021084, 0x00000000, 0x00010842, 0x00000000, 0x18c60000, 0xc6318c63,
        0x00000000, 0x84210000, 0x21084210, 0x08421084, 0x00108421, 0x10840000,
        0x84210842, 0x21084210, 0x00001084, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x00084210, 0x21024000, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x00000042, 0x21084000, 0x42108421, 0x10842108, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00810042, 0x00000000, 0x01080000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x84210000, 0x21084200, 0x00420084, 0x00000001, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000421,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x42100000, 0x00000008, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x00084210, 0x08420000, 0x42108421, 0x00002108, 0x84210842, 0x00000210,
        0x08420000, 0x42108421, 0x02100000, 0x0004a529, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21080010, 0x08421084, 0x42108421, 0x10842108, 0x00000002,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10000000,
        0x00010842, 0xa1084210, 0x294a5294, 0x42108425, 0x10002108, 0x04210842,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84200000, 0x00000010,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00842000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108021, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10802108, 0x84000800, 0x21084000, 0x08421080,
        0x42108421, 0x10840100, 0x84010842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x04210842, 0x00084210, 0x08421084, 0x42108021, 0x10802108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x00842100, 0x80210842, 0x21080000,
        0x08021084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x04210842, 0x21084200, 0x08421084, 0x42108421, 0x10842108,
        0x84210802, 0x21084210, 0x08421084, 0x42108421, 0x10842008, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842008, 0x84210842, 0x21084210,
        0x08421084, 0x42108021, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108021, 0x10842108, 0x84210842, 0x21084210, 0x08420084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08420084, 0x42108421, 0x10842108,
        0x84210842, 0x21080210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21080210, 0x08421084, 0x42108421, 0x10842108, 0x84200842, 0x01084210,
        0x18c63180, 0xc6318c63, 0x318c6318, 0x8c6318c6, 0x6318c631, 0x18c6318c,
        0xc6318c63, 0x318c6318, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x00021084, 0x42108400,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x00000000, 0x00001000, 0x00000000, 0x00800000, 0x00000000,
        0x00000000, 0x00000000, 0x42108400, 0x10842100, 0x84210842, 0x00004210,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x00842108, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x10842108, 0x84210802, 0x21084210, 0x08421084,
        0x42108400, 0x00840108, 0x00210842, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x21080000,
        0x42121084, 0x00042108, 0x8c6318c6, 0x0000c631, 0x00000080, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x08420000, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x00000204, 0x00000000, 0x00000000, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x81084210, 0x18c64210,
        0xc6318c63, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x84210842,
        0x01084200, 0x08420084, 0x42108421, 0x00842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x00210842, 0x00000000, 0x21080000, 0x00021084,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x10810842, 0x01210842,
        0x18c60000, 0xc6318c63, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x84010842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x00200840, 0x21084010, 0x08421084, 0x40108420, 0x00000100,
        0x00000800, 0x01004010, 0x08401084, 0x40100020, 0x10040100, 0x00200840,
        0x20084210, 0x08421084, 0x40108420, 0x00802108, 0x84210842, 0x21004210,
        0x08421084, 0x42108421, 0x00000108, 0x84010840, 0x21004210, 0x08421084,
        0x42108421, 0x00000108, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x08420000, 0x42108421, 0x10842108, 0x84210842, 0x00004210,
        0x08420000, 0x42108421, 0x10842108, 0x84210842, 0x00004210, 0x08420000,
        0x42108421, 0x10842108, 0x84210842, 0x00004210, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x40000000,
        0xd6b5ad6b, 0xb5ad6b5a, 0xad6b5ad6, 0x6b5ad6b5, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x42108400,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18c60000,
        0xc6318c63, 0x00000000, 0x00000120, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210,
        0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084,
        0x42108421, 0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421,
        0x10842108, 0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108,
        0x84210842, 0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842,
        0x21084210, 0x08421084, 0x42108421, 0x10842108, 0x84210842, 0x00004210,
        0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 5,
    default: 0,
};

pub(crate) static LINE_BREAK: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0003, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0005, 0x0002, 0x0006, 0x0007, 0x0008,
        0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014,
        0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x001f, 0x0020,
        0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0002, 0x0002, 0x0002, 0x0002, 0x0026, 0x0027, 0x0028,
        0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0032, 0x0002, 0x0033,
        0x0002, 0x0002, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x003a, 0x003b, 0x003c, 0x003d,
        0x003e, 0x003f, 0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0002, 0x0002, 0x0002, 0x0046,
        0x0002, 0x0002, 0x0047, 0x0048, 0x0002, 0x0049, 0x004a, 0x004b, 0x004c, 0x004d, 0x004e, 0x004f,
        0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x0055,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x0056, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x0057, 0x0002, 0x0002, 0x0058, 0x0059, 0x0002, 0x005a,
        0x005b, 0x005c, 0x005d, 0x005e, 0x005f, 0x0060, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066,
        0x0067, 0x0068, 0x0069, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x0063, 0x0064,
        0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069,
        0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067,
        0x0068, 0x0069, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x0063, 0x0064, 0x0065,
        0x0066, 0x0067, 0x0068, 0x0069, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x0063,
        0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068,
        0x0069, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x0063, 0x0064, 0x0065, 0x006a,
        0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b, 0x006b,
        0x006b, 0x006b, 0x006b, 0x006b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x004e, 0x004e, 0x004e, 0x004e, 0x006c, 0x006d,
        0x0002, 0x0002, 0x006e, 0x006f, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077,
        0xffff, 0x0078, 0x0079, 0x007a, 0x0002, 0x007b, 0x007c, 0x007d, 0x0002, 0x0002, 0x007e, 0x007f,
        0x0080, 0x0081, 0x0082, 0x0083, 0x0084, 0x0085, 0x0086, 0x0087, 0x0088, 0x0089, 0x008a, 0xffff,
        0x008b, 0x008c, 0x008d, 0x008e, 0x008f, 0x0090, 0x0091, 0x0092, 0x0093, 0x0094, 0x0095, 0xffff,
        0x0096, 0x0097, 0xffff, 0x0098, 0x0099, 0x009a, 0x009b, 0xffff, 0x009c, 0x009d, 0x009e, 0x009f,
        0x00a0, 0x00a1, 0xffff, 0xffff, 0x00a2, 0x00a3, 0x00a4, 0x00a5, 0xffff, 0x00a6, 0xffff, 0x00a7,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00a8, 0x00a9, 0x0002, 0x00aa, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00ab, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00ac, 0x00ad, 0x00ae, 0x0002, 0x00af, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x00b0, 0x00b1, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x00b2, 0x00b3, 0x00b4, 0x00b5, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00b6, 0x00b7, 0x00b8, 0x00b9, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x00ba, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x0002, 0x0002,
        0x0002, 0x00bb, 0x00bc, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00bd,
        0x004e, 0x004e, 0x00be, 0x004e, 0x004e, 0x00bf, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00c0, 0x00c1, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x00c2, 0x00aa, 0x0002, 0x00c3, 0x00c4, 0x00c5, 0x00c6, 0x00c7, 0x00c8, 0xffff,
        0x00c9, 0x00ca, 0x00cb, 0x0002, 0x0002, 0x00cc, 0x0002, 0x00cd, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00ce, 0x00cf, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00d0, 0xffff,
        0x00d1, 0xffff, 0x00d2, 0xffff, 0xffff, 0x00d3, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00d4, 0x0002, 0x00d5, 0x00d6, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00d7, 0x00d8, 0x00d9, 0xffff, 0x00da, 0x00db, 0xffff, 0xffff, 0x004e, 0x004e, 0x00dc, 0x00dd,
        0x004e, 0x004e, 0x004e, 0x00de, 0x00df, 0x00e0, 0x00e1, 0x00e2, 0x00e3, 0x00e4, 0x00e5, 0x00e6,
        0x00e7, 0x00e8, 0x00e9, 0x00ea, 0x00eb, 0x00ec, 0x0002, 0x00ed, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x00ee, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e,
        0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x004e, 0x00ee,
        0x00ef, 0xffff, 0x00f0, 0x00f1, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0xc30c30c3, 0x22430c30, 0x0c304000, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0x976933c7, 0xa3924da5, 0x6142d45d, 0x55555555, 0x45555555, 0x3da69a51,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a39749,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x0da34949,
        0x430c30c3, 0x30c30c3a, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xd75d6486, 0x969965a5, 0x69a25a4d, 0x8a6595d6, 0x96596596, 0x4996594d,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a65a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a65a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x964a65a6, 0x69a64a65, 0x9a69a699, 0x965969a6, 0x29a65a65,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x1830c30c, 0xc30c30c3, 0x30c30c30, 0x1861860c,
        0xc30c6186, 0x30c30c30, 0x0c30c30c, 0x9a69a69a, 0xaa2869a6, 0x69469a69,
        0x9aa28a28, 0xa69a69a6, 0x69aa1aa1, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a6a869a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc30da69a, 0xa0c30c30, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a6a8, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa6a8a1a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x951a69a6, 0x5da6a8a0, 0xc30c30e8, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c90c30c,
        0xc36830da, 0x8a280cf0, 0xa28a28a2, 0x20820820, 0x08208208, 0x82082082,
        0x20820820, 0x08208208, 0x828a28a2, 0x1a6a0820, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0x659a69a6, 0x69a51459, 0xc30c30c3, 0x30c30c30, 0x3cf3c33c,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0c30c30d, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0x55555555, 0x65555555, 0x69a69555, 0x9a69a683, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x8f69a69a, 0x30c30c36, 0x0da6830c,
        0x830c30c3, 0x36830da6, 0x69a0c30c, 0x55555555, 0xa5555555, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x6a869a69, 0x9a69a0da, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x69a6a8a0, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x30c30c36, 0x0c30c30c, 0x28a28683, 0x8a28a28a, 0xa28a28a2,
        0x55555555, 0xa5555555, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0c30c30d, 0x9a0c30c3, 0xa3d469a6, 0x5d70e8a1,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa0c30c36, 0x0c30c30d,
        0xda0c30c3, 0x30da0c30, 0xa280c30c, 0x9a69a69a, 0xa69a69a6, 0xa1a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x30da69a6, 0xa1aa280c,
        0x9a69a69a, 0xa69a69a6, 0xa28a28a1, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa1a69a69, 0x28a2869a, 0x30c3a28a, 0x0c30c30c,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x369a69a6, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30da0c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0x9a0c30c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x369a69a6, 0x0c36830c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30da, 0xa69a0c30, 0x69a69a69,
        0x490c369a, 0x55555552, 0x55555555, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xa80c30da, 0xa69a69a6, 0x6a8a1a69, 0x9a6a8a1a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0x69a69a69, 0x28a1aa1a, 0x869a69aa, 0x0c3683a2,
        0x030c30c3, 0x8a030e8a, 0xa1a0c30e, 0x28a28a28, 0x8a280e8a, 0x6a869aa2,
        0x280c369a, 0x5555555a, 0x55555555, 0x9a59669a, 0xa59a69a6, 0xa0369a5d,
        0xa80c30e8, 0xa69a69a6, 0x6a8a28a1, 0x9a6a8a1a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0x69a69a69, 0xa869aa1a, 0x869aa1a6, 0x0c3a03a2,
        0x28a030c3, 0x8a030e8a, 0xa280c30e, 0x28a280e8, 0xa6a8a28a, 0xa1aa1a69,
        0x28a28a28, 0x5555555a, 0x55555555, 0xda69a0c3, 0x8a28a1a0, 0xa28a28a2,
        0xa80c30e8, 0xa69a69a6, 0x6a869a69, 0x9a6a869a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0x69a69a69, 0xa869aa1a, 0x869a69a6, 0x0c3683a2,
        0xc30c30c3, 0x80c30e80, 0xa280c30e, 0x28a28a1a, 0x8a28a28a, 0xa28a28a2,
        0x280c369a, 0x5555555a, 0x55555555, 0x28a285da, 0x36a8a28a, 0x0c30c30c,
        0xa80c30e8, 0xa69a69a6, 0x6a8a1a69, 0x9a6a8a1a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0x69a69a69, 0xa869aa1a, 0x869a69a6, 0x0c3683a2,
        0x030c30c3, 0x8a030e8a, 0xa280c30e, 0xe8a28a28, 0x8a280c30, 0x6a869aa2,
        0x280c369a, 0x5555555a, 0x55555555, 0x9a69a69a, 0x8a2869a6, 0xa28a28a2,
        0xa8683a28, 0xa69a69a6, 0x69aa28a1, 0x9a69aa1a, 0xa6a8a286, 0x69aa1aa1,
        0x1a6a8a28, 0xa69aa28a, 0x69aa28a1, 0x9a69a69a, 0x869a69a6, 0x0c3a28a2,
        0x28a030c3, 0x3a030c3a, 0xa280c30c, 0x28a28a1a, 0x8a280e8a, 0xa28a28a2,
        0x28a28a28, 0x5555555a, 0x55555555, 0x9a69a69a, 0xa5da69a6, 0xa28a28a1,
        0x830c30c3, 0xa69a69a6, 0x69aa1a69, 0x9a69aa1a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0x69a69a69, 0x9a69a69a, 0x869a69a6, 0x0c3683a2,
        0x030c30c3, 0x3a030c3a, 0xa280c30c, 0xe8a28a28, 0xa69aa030, 0xa286a8a1,
        0x280c369a, 0x5555555a, 0x55555555, 0x28a28a28, 0xa69a2a8a, 0x69a69a69,
        0x8a0c30da, 0xa69a69a6, 0x69aa1a69, 0x9a69aa1a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0x69a69a69, 0xa869a69a, 0x869a69a6, 0x0c3683a2,
        0x030c30c3, 0x3a030c3a, 0xa280c30c, 0xe8a28a28, 0x8a28a030, 0xa1a6a8a2,
        0x280c369a, 0x5555555a, 0x55555555, 0x28a1a6a8, 0x8a28a28a, 0xa28a28a2,
        0x9a0c30c3, 0xa69a69a6, 0x69aa1a69, 0x9a69aa1a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x0c36830d,
        0x030c30c3, 0x3a030c3a, 0x69a0c30c, 0x9aa28a28, 0xa69a0da6, 0x69a69a69,
        0x280c369a, 0x5555555a, 0x55555555, 0x9a69a69a, 0xa59a69a6, 0x69a69a69,
        0xa80c30e8, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xaa28a1a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a6a869a, 0xa69a69a6, 0xa286a869,
        0x9a69a69a, 0x3a28a1a6, 0x0e8a28a0, 0x030c30c3, 0x30c3a03a, 0x0c30c30c,
        0x28a28a28, 0x5555555a, 0x55555555, 0x1a0c3a28, 0x8a28a28a, 0xa28a28a2,
        0xa69a69a8, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x5e8a28a2,
        0xa69a69a6, 0x69a69a69, 0x6a69a69a, 0x55555555, 0x95555555, 0xa28a2824,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x26a269a8, 0x69a69a6a, 0x9a69a6a2, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa89a69a6, 0x69a69a89, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xa289a69a,
        0x269a69a6, 0x69a6a26a, 0xa289a69a, 0x55555555, 0x85555555, 0x9a69a6a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x8a28a29a, 0xa28628a6, 0x3cf3c624, 0x8f6863cf, 0xa0c369a6, 0x69a69a69,
        0x55555555, 0xa5555555, 0x69a69a69, 0xc969a69a, 0x20da0da0, 0x0c335235,
        0x9a69a69a, 0xa6a869a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a1a69, 0xc30c30e8, 0x30c30c30, 0x2430c30c,
        0x430c30c3, 0xa69a0c32, 0x0c30da69, 0xc30c30c3, 0x30e80c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x249a030c,
        0x9a69a69a, 0xa69a6836, 0x69aa1a69, 0x9a28928a, 0x619a69a6, 0xa28a28a0,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0x55555555, 0x95555555, 0x69a69a24, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x55555555, 0x65555555, 0x9a69a69a,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a286a86, 0xa286a8a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a,
        0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a,
        0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a,
        0xe38e38e3, 0x38e38e38, 0x8e38e38e, 0xe38e38e3, 0x38e38e38, 0x8e38e38e,
        0xe38e38e3, 0x38e38e38, 0x8e38e38e, 0xe38e38e3, 0x38e38e38, 0x8e38e38e,
        0xe38e38e3, 0x49248e38, 0x92492492, 0x24924924, 0x49249249, 0x92492492,
        0x24924924, 0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492,
        0x24924924, 0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0xa2869a69, 0x9a69a69a, 0xaa1aa1a6, 0xa2869a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0xa2869a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69aa1a, 0xa69aa286, 0xa1a69a69,
        0x9a69aa1a, 0xa69aa286, 0x69a69a69, 0x9a69a69a, 0xa69aa1a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69aa1a, 0xa69aa286, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x0c30e8a1,
        0x9a69a25a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa28a1a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x869a69a6, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69aa286, 0xa2869a69,
        0x9a69a689, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a689, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa28a0d49,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a24925, 0x9a69a69a, 0x8a1a69a6, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c369a, 0x8a28a280, 0x6a8a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x430c369a, 0x8a28a092, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x280c369a, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69aa1a69, 0x280c3a1a, 0x8a28a28a, 0xa28a28a2,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x499a69a6, 0x96899912, 0xa289a65c,
        0x55555555, 0x85555555, 0xa28a28a2, 0x9a69a69a, 0x869a69a6, 0xa28a28a2,
        0x493cf69a, 0xa3cf68a2, 0x0c60c30d, 0x55555555, 0x85555555, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a1a69a6, 0xa28a28a2,
        0xda69a69a, 0xa69a6830, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa0da69a6, 0xa28a28a1, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a28a286, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa1a69a69,
        0xc30c30c3, 0x30c30c30, 0xa28a280c, 0xc30c30c3, 0x30c30c30, 0xa28a280c,
        0xcfa28a1a, 0x55555553, 0x55555555, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0xa289a69a, 0x269a69a6, 0x8a28a28a, 0xa28a28a2,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0xa28a289a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x89a69a69, 0xa28a28a2, 0x55555555, 0x65555555, 0x9a6a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x30c30da6, 0x69aa280c,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xa269a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x0e8a269a,
        0x55555555, 0x85555555, 0xa28a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0xa69a69a6, 0x69a69a69, 0xa289a69a, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0xa030c30c, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x830c30c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc369a69a, 0x30c30c30, 0x0c30c30c,
        0x830c30c3, 0xa69a69a6, 0xa28a1a69, 0x55555555, 0x95555555, 0x24925a24,
        0x9a69a689, 0xa69a69a6, 0x0c30c30d, 0x9a0c30c3, 0xa69a69a6, 0xa0925a69,
        0x9a6830c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc30c30da, 0x30c30c30, 0x69a0c30c, 0x55555555, 0xa5555555, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x30c30c36, 0x0c30c30c, 0x280c30c3, 0x8a28a28a, 0x69a69aa2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc369a69a, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x8a280c30, 0x24924926,
        0x55555555, 0x85555555, 0x69a6a8a2, 0x55555555, 0xa5555555, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x24969a69,
        0x9a69a69a, 0x8a1a69a6, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a6a8a1,
        0x9a69a69a, 0x8a2869a6, 0xa28a28a2, 0xc36830c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0xa6830c30, 0x69a0da69, 0x8369a69a, 0xa0c30da6, 0xa28a28a1,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69aa286, 0xa2869a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69aa286, 0xa2869a69, 0x9a69a69a, 0x86a869a6, 0x6a86a86a,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa2869a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x1a69a69a, 0xa69a69aa, 0x69a69a69,
        0x1a69a69a, 0xa69a69aa, 0x69a69a69, 0x2869a69a, 0xa69a69aa, 0x69a6a869,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x1a69aa28, 0xa69a69aa, 0xa1a29a69,
        0x49249249, 0x92491892, 0x0c3a8314, 0x48249189, 0x24d36996, 0x4d24d34d,
        0x1069a659, 0x30002504, 0x1830c30c, 0x96596596, 0x34da5965, 0x69a45165,
        0x9469a69a, 0xa45144d4, 0x69a69a69, 0x9a69a69a, 0x92496896, 0x24925a24,
        0x1a69a684, 0x30c30c3a, 0x0c30c30c, 0x99a2869a, 0xa69a69a6, 0x64d49a69,
        0x9965965a, 0xa69a69a6, 0xa0d49a69, 0x9a69a69a, 0xa69a69a6, 0xa28a1a69,
        0xd75d75d7, 0x75d75975, 0x5d75d75d, 0xd75d75d7, 0x75d75d65, 0x5d65d759,
        0xd75d75d6, 0x75d75d75, 0x5d75d75d, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0x28a28a03, 0x8a28a28a, 0xa28a28a2,
        0x5a59a69a, 0xa59a69a6, 0x69a69a69, 0x9a65a69a, 0xa69a6976, 0x69a69a69,
        0x9a69965a, 0xa69a69a6, 0x69a69a65, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x5969a69a, 0xa69a69a6, 0x69969a65,
        0x59659659, 0x96596596, 0x69a69a65, 0x59659659, 0xa6596596, 0x69a69a69,
        0x9a69a69a, 0xa65a69a6, 0xa28a2869, 0x59659659, 0xa6596596, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9969969a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a659699, 0xa69965a6, 0x65a69a65, 0x5a5d765a, 0x969a69a6, 0x65965a69,
        0x5a65a699, 0x965965a6, 0x69969965, 0x5969a69a, 0xa69a6596, 0x69a65969,
        0x9a69a69a, 0xa69969a6, 0x69a69969, 0x9a69969a, 0xa69a69a6, 0x69a69a69,
        0x5969a659, 0x969a6596, 0x65969a65, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a65969a, 0xa69a6596, 0x69a69a69, 0x5a69a69a, 0xa65a69a6, 0x69a69a69,
        0x5a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x65a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x41a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x235269a6, 0x69a69a35, 0x9a69969a, 0x169a69a6, 0x69a69a86,
        0x9a69a69a, 0xd49a69a6, 0x69a69a68, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a861861, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a28a1a6, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0xa28a28a1, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x69965965,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x69a69a65, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x99659659, 0xa69a69a6, 0x69a69a69,
        0x59659659, 0x96596596, 0x65965965, 0x5965969a, 0xa69a69a6, 0x69a69a69,
        0x5965a659, 0xa6596596, 0x69a69a69, 0x9a65969a, 0xa69a6596, 0x69a65969,
        0x9a69a659, 0xa6996596, 0x65969a65, 0x9a69a659, 0xa69a69a6, 0x69a69a69,
        0x5965969a, 0xa69a69a6, 0x65a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x5a861861, 0xa65a6996, 0x65969a69, 0x6169a69a, 0x16a16598, 0x86172186,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x185a69a6, 0x69a69a86,
        0x9a699699, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x5965a659, 0x966165a6, 0x65a65969, 0x9a69a69a, 0xa69a69a6, 0x85a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x65969a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x86185a69,
        0x61861861, 0x96618618, 0x85a85965, 0x61859861, 0x98616596, 0x85966165,
        0x9a65a861, 0x165969a6, 0x65965966, 0x61861859, 0x17218598, 0x86185966,
        0xa1861861, 0xc86169a6, 0x69a71c71, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a65a6, 0x4d34d34d,
        0xa13cf693, 0x235269a6, 0x35235235, 0x52352352, 0x96596593, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x9a659659, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a68d4, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x23523526, 0x35235235, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x8d49a69a, 0xd48d48d4, 0x48d48d48, 0x8d48d48d, 0xa68d48d4, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x235269a6, 0x69a69a35,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a35269,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x5a69a69a, 0xa6596596, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x2869a69a, 0xa69a69aa, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a6a86, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0da69a69, 0x2869a0c3, 0x93e8a28a, 0x24f68924,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a286a86, 0xa286a8a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a2869a6, 0x6a8a28a2, 0x28a28a09, 0x8a28a28a, 0x0e8a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a28a1a6, 0xa28a28a2,
        0x9a69a69a, 0xa69aa1a6, 0xa1a69a69, 0x9a69a69a, 0xa69aa1a6, 0xa1a69a69,
        0x9a69a69a, 0xa69aa1a6, 0xa1a69a69, 0x9a69a69a, 0xa69aa1a6, 0xa1a69a69,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xd34d34d3, 0x34d34d34, 0x2494d34d, 0x49249249, 0xa25225a2, 0x69a4d369,
        0x523524d3, 0x93523523, 0x68f24924, 0x8925a249, 0x869a69a6, 0x68924920,
        0x49252249, 0x92492492, 0x24968968, 0x8f3da69a, 0xd48d48d4, 0xa2824d48,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x88618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x28861861, 0x8a28a28a, 0xa28a28a2,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x8a28a288, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x61861861, 0x18618618, 0xa28a2886,
        0x6184d349, 0x23528614, 0x35235235, 0x52861352, 0x23523523, 0x34d49135,
        0x61861861, 0x38618618, 0x0c30c30c, 0xe1861861, 0x18618610, 0x86185146,
        0xe16e16e8, 0x16e16e16, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x616e1861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0xe16e1861, 0x18616e16, 0x85b86186, 0xe1861861, 0x30e8a1b6, 0x85145144,
        0xe16e16d1, 0x16e16e16, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x616e1861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0xe16e1861, 0x18616e16, 0x85b86186, 0xe1861861, 0x186185b6, 0x85145b46,
        0x68a28a28, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861868, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0xa2186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x28861861, 0x8a28a28a, 0xa28a28a2, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0xa2186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x96598618, 0x65965965, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618614, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0xa28a2186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x8a28a218, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x24969a69,
        0x9a69a69a, 0xa69a69a6, 0x24f25a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x55555555, 0xa5555555, 0xa28a2869, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0da69a69, 0xc36830c3, 0x30c30c30, 0x69a0c30c,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x0c369a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x4925a0c3, 0x8a282492, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a28a1, 0xa86a869a, 0x869a69a6, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x9a69aa28, 0xa69a69a6, 0x69a69a69,
        0x9a68369a, 0xa69a6836, 0x69a69a0d, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc30da69a, 0xa69a0c30, 0xa28a0369, 0x9a69a69a, 0x869669a6, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x8a69a69a, 0x8a283cf2, 0xa28a28a2,
        0x9a69a0c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc369a69a, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x8a28a280, 0x249a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0x9a69a0c3, 0xa69a69a6, 0x0da68a69,
        0x55555555, 0xa5555555, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x30c30c36, 0x2490c30c, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x30c30da6, 0x0c30c30c, 0x280c30c3, 0x8a28a28a, 0x6a8a28a2,
        0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0xa28a228a,
        0x9a0c30c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30da69a, 0x30c30c30, 0x0c30c30c,
        0x9a69a683, 0xa24925a6, 0x6a869a69, 0x55555555, 0x85555555, 0x69aa28a2,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x55555555, 0x65555555, 0xa269a69a,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x30da69a6, 0x0c30c30c, 0xc30c30c3, 0x8a28a030, 0xa28a28a2,
        0x9a0da69a, 0xa69a69a6, 0xa280c369, 0x55555555, 0x85555555, 0x24925aa2,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a,
        0x28a269a6, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0x9a69a69a,
        0x9a69a69a, 0xa69a69a6, 0x0c30c30d, 0xda69a249, 0x8a28a030, 0xa28a28a2,
        0x9a69a6a8, 0xa6a8a1a6, 0xa1a69a69, 0x9a69a6a8, 0x8a28a1a6, 0xa28a28a2,
        0x9a69a69a, 0xa69aa1a6, 0xa1a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a2869, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc30da69a, 0x30c30c30, 0xa280c324, 0x55555555, 0x85555555, 0xa28a28a2,
        0xdf7df7de, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7de7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7de7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xde7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7de, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7de7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7de7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xde7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7de, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7de7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7de7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xde7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7de, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7de7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7de7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xde7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7de, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7de7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7de7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xde7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7de, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7de7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7de7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xde7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7de, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7de7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7de7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xde7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7de, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7df7df7, 0x7df7de7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7de7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xde7df7df, 0xf7df7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0xdf7df7df, 0xf7de7df7, 0x7df7df7d, 0xdf7df7df, 0xf7df7df7, 0x7df7df7d,
        0x287df7df, 0x8a28a28a, 0xa28a28a2, 0xe38e38e3, 0x38e38e38, 0x8e38e38e,
        0xe38e38e3, 0x8a28a238, 0x92492492, 0x24924924, 0x49249249, 0x92492492,
        0x24924924, 0x49249249, 0x92492492, 0x24924924, 0x49249249, 0xa28a2892,
        0xe79e79e7, 0x79e79e79, 0x9e79e79e, 0xe79e79e7, 0x79e79e79, 0x9e79e79e,
        0xe79e79e7, 0x79e79e79, 0x9e79e79e, 0xe79e79e7, 0x79e79e79, 0x9e79e79e,
        0xe79e79e7, 0x79e79e79, 0x9e79e79e, 0xe79e79e7, 0x79e79e79, 0x9e79e79e,
        0xe79e79e7, 0x79e79e79, 0x9e79e79e, 0xe79e79e7, 0x79e79e79, 0x9e79e79e,
        0x9a69a69a, 0x8a28a1a6, 0xa28a28a2, 0x9a6a8a28, 0x8a2869a6, 0x803828a2,
        0x20820820, 0x06a08208, 0x82082082, 0x20820820, 0x0820a208, 0xa20a2082,
        0x20828820, 0x0820820a, 0x82082082, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x28a1a69a, 0x8a28a28a, 0xa28a28a2, 0x9a6a8a28, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x48d69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69aa28, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a2869a6, 0x6a8a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69669,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xd450d354, 0x840d48f3, 0xa28a28a2,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xa1861861, 0xd48d48d4, 0x48d48d48,
        0x4d48d48d, 0x184d4a18, 0x86186186, 0x51a0d84d, 0xd4a13cf4, 0x84d48d48,
        0x61861861, 0x65e1a218, 0xa28a2885, 0x1a69a69a, 0xa69a69aa, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x128a1a69,
        0x978613e8, 0x13528615, 0x84d84d86, 0x61861861, 0x18618618, 0x3e186145,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x8613614a,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x4a13614a,
        0x4d35234d, 0xb6db6e14, 0x6db6db6d, 0x6186185b, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x45186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0xa2186186,
        0x61861a28, 0x1a288618, 0x86186186, 0x61861a28, 0x1a288618, 0xa28a2186,
        0xe18615d6, 0xa69aa175, 0xa1a69a69, 0x28a28a28, 0x30e8a28a, 0xa2864c0c,
        0x9a69a69a, 0xa69a69a6, 0x69a6a869, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69aa1a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x6a869aa1,
        0x9a69a69a, 0xa69a69a6, 0xa2869a69, 0x9a69a69a, 0xa69a69a6, 0xa2869a69,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa28a28a1,
        0x28a09249, 0xa69a6a8a, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x2869a69a, 0xa69a6a8a, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa1a69a69, 0x9a69a69a, 0xa69a69a6, 0xa28a1a69,
        0x28a28a1a, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa280da69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa28a1a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x28a28a1a, 0x8a28a28a, 0xa28a28a2,
        0x9a69a683, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa28a2869,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x2869a69a, 0x8a28a28a, 0x69a6a8a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a28a1, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x30c30c36, 0xa28a28a0,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x26869a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x2869a69a, 0xa69aa28a, 0x69a69a69, 0x9a69a689, 0x8a28a286, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa2869a69,
        0x55555555, 0x85555555, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x2869a69a, 0xa69aa28a, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa28a2869,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a2869a6, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x2869a69a, 0x8a28a28a, 0x6a8a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69aa1,
        0x9a69a69a, 0xa69a69a6, 0x69a69aa1, 0x9aa1a69a, 0xa69a6a86, 0x69a69a69,
        0x9a6a869a, 0xa69a69a6, 0x69a69a69, 0x9a6a869a, 0x869a69a6, 0xa28a1a6a,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a28a1a6, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a28a286, 0xa28a28a2,
        0x9a69a69a, 0x8a2869a6, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a6a86, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69aa1a, 0xa69a69a6, 0xa28a28a1,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xaa1aa286, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a1a6a86, 0x6a8a1aa2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a2686, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa1a69a69,
        0x28a28a28, 0xa69a6a8a, 0x69a69a69, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9aa1a69a, 0x8a28a286, 0x69a69a6a,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x268a2869,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x869a69a6, 0x6a8a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a2869a6, 0x69a69aa2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69aa28, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xe80c30da, 0x8a28a030, 0x0c30c3a2, 0xa869a69a, 0xa6a869a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x30c3a286, 0x0e8a28a0,
        0x9a69a69a, 0x8a1a69a6, 0xa28a28a2, 0x49249249, 0x8a1a2492, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xda69a69a, 0x8a28a030, 0x69a69a6a, 0x49249249, 0x8a28a102, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x9268a286, 0x24924924,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69aa286, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x28a1a69a, 0xa69aa28a, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x28a2869a, 0xa6a8a28a, 0xa28a1a69,
        0x28a28a28, 0xa6a8a28a, 0x69a69a69, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a1a69a6, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x28a1a69a, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x28a1a69a, 0xaa28a28a, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc369a69a, 0x8a280c30, 0xa28a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa1a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x869a69a6, 0xa282430e, 0x28a2869a, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a2869a6, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x30c30c36, 0x0c30c30c, 0x9a69a683, 0x869a69a6, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc30c369a, 0x869a69a0, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a2869, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a28a1a6, 0xa28a28a2,
        0x9a6830c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x30c369a6, 0x0c30c30c,
        0xc30c30c3, 0xa6892430, 0xa2869a69, 0x9a69aa28, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x55555556, 0x55555555, 0x830da683, 0x8a28a286, 0x0e8a28a2,
        0x9a6830c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c30c3, 0x30c30c30, 0x24969a68,
        0x28a03249, 0x8a28a28a, 0xa286a8a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a1a69a6, 0xa28a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0x9a6830c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x30c30da6, 0x0c30c30c, 0x030c30c3, 0x5555555a, 0x55555555,
        0xda249249, 0x8a286830, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a0da69a, 0x8a28a1a2, 0xa28a28a2,
        0x9a6830c3, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30da69a, 0x30c30c30, 0x0c30c30c,
        0x5a69a683, 0x30c96892, 0x0c36830c, 0x55555555, 0xa5555555, 0x24925a29,
        0x9a69a6a8, 0xa69a69a6, 0x69a69a69, 0x1a69a69a, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a6a869a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0c30c369, 0xc30c30c3, 0xa2490c30, 0xa0368925,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xaa1aa1a6, 0x6a869a69, 0x9a69a69a, 0xa69a69a6, 0x6a869a69,
        0x9a69a69a, 0x825a69a6, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x0da69a69,
        0xc30c30c3, 0x30c30c30, 0xa28a28a0, 0x55555555, 0x85555555, 0xa28a28a2,
        0xa80c30c3, 0xa69a69a6, 0x6a8a1a69, 0x9a6a8a1a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xaa1a69a6, 0x69a69a69, 0xa869aa1a, 0x869a69a6, 0x0c36830e,
        0x030c30c3, 0x8a030e8a, 0xa280c30e, 0x28a28a1a, 0x8a280e8a, 0x69a6a8a2,
        0x280c369a, 0x30c30c3a, 0xa28a030c, 0x030c30c3, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xda69a69a, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0xa69a6830, 0x68924925, 0x55555555, 0x95555555, 0x6836a824,
        0x28a2869a, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0x9a0c30c3, 0x8a2869a6, 0xa28a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0da69a69, 0xc30c30c3, 0x30c3a280, 0x0c30c30c,
        0xcf249283, 0x925a69a3, 0x24924924, 0x49249249, 0xa69a2492, 0xa280c369,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0x1a689243, 0x8a28a28a, 0xa28a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0x8a28a28a, 0xa28a28a2, 0xa28a0a28, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0c30c30d, 0xc30c30c3, 0x869a0c30, 0xa28a28a2,
        0x55555555, 0x85555555, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a8a2,
        0xa69a69a6, 0x69a69a69, 0xa28a289a, 0x55555555, 0x65555555, 0x9892499a,
        0xa69a69a6, 0x8a28a269, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0c30c369, 0xc30c30c3, 0x30c30c30, 0xa28a2868,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x55555555, 0xa5555555, 0x69a69a69, 0x28a1a69a, 0x8a28a28a, 0x6a8a28a2,
        0x9a69a69a, 0x86a8a1a6, 0x69a69aa2, 0xa869a69a, 0xa69aa1a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c30c3, 0x8a030e80, 0x6830c30e,
        0x490c3683, 0x8a28a092, 0xa28a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xaa2869a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c30da, 0x3a280c30, 0x0c30c30c,
        0x0368a683, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0xc30c30da, 0x30c30c30, 0x69a69a68, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30da69a, 0xa0c30c30, 0x2830c30d,
        0x8924925a, 0x8a280da2, 0xa28a28a2, 0xc30c30da, 0x30c30c30, 0x69a69a0c,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x369a69a6, 0x0c30c30c, 0xc30c30c3, 0x90c30c30, 0x28a68924,
        0x28a0924a, 0x8a28a28a, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a1a69a6, 0xa28a28a2,
        0x9a69a69a, 0xaa1a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0da69a69, 0xc30c30c3, 0x30c3a030, 0x0c30c30c,
        0x4924925a, 0x8a28a282, 0xa28a28a2, 0x55555555, 0xa5555555, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a1a69, 0x9a69a3ca, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c3a28, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30e80c30, 0x0c30c30c, 0xc30c30c3, 0x8a28a030, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0x869aa1a6, 0x69a69a6a, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c30da, 0x3a28a030, 0x0e80c3a0,
        0xc30c30c3, 0x8a280da0, 0xa28a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0x9a69a69a, 0xaa1a6a86, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x369a69a6, 0xa030c30c, 0xc30e80c3, 0x8a1a0c30, 0xa28a28a2,
        0x55555555, 0x85555555, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30da69a, 0x8a1a6830, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a1a, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x59659a69,
        0x9a69a696, 0xa69a69a6, 0x69a69a69, 0x28a2869a, 0x8a28a28a, 0x268a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x869a69a6, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa1a69a69, 0x09249249, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x2869a69a, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x28a1a69a, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x249269a6, 0x69a34d35,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a68d69a, 0xa3523526, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xd49a69a6, 0x69a69a34,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa1a69a69, 0x86186186, 0x8a0d4861, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x35269a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x8a28a1a6, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a1a69a6, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa1a69a69,
        0x55555555, 0x85555555, 0x249a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa1a69a69,
        0x55555555, 0x85555555, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa2869a69, 0x430c30c3, 0x8a28a282, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0xc30c30c3, 0xa2492430, 0x69a69a69,
        0x8969a69a, 0x8a28a286, 0xa28a28a2, 0x55555555, 0x85555555, 0x69a69a6a,
        0x9a6a869a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a2869a6, 0x69a6a8a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa68925a6, 0xa28a28a1,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0e8a28a1, 0xc30c30da, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x8a280c30, 0x0e8a28a2, 0x9a6830c3, 0xa69a69a6, 0x69a69a69,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x06451451, 0x8a28a28a, 0xa28a28a2, 0x28a280c3, 0x8a28a28a, 0xa28a28a2,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x8a288618, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a28a286, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x61861861, 0x8a218618, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0xa869a69a, 0xa69a69a6, 0xa1a6a869,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x28a21861, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a1b6db, 0x8a28a28a, 0xa28a28a2,
        0xdba28a28, 0x8a286db6, 0xa28a28a2, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0xa28a2886,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a28a1, 0x9a69a69a, 0xa69a69a6, 0xa28a1a69,
        0x9a69a69a, 0x8a1a69a6, 0xa28a28a2, 0x9a69a69a, 0x869a69a6, 0x2430daa2,
        0x280c30c3, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0xa280c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x8a28a030, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a28a286, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa6a8a1a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xda69a69a, 0xa0c30c30, 0x0c30da69, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xda6830c3, 0x30c30c30, 0x69a69a0c, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x369a69a6, 0x69a0c30c, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a28a1, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x830c369a, 0x8a28a286, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x2869a69a, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a28a1a6, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x8a1a69a6, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x1a69a69a, 0xa69a69aa, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69aa1a69,
        0xa8a1aa28, 0xa6a8a1a6, 0x69aa1a69, 0x9a69a69a, 0x869a69a6, 0x69a6a86a,
        0xa869a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a6a86, 0x69a6a8a1, 0x1a69a69a, 0xa69a69aa, 0x69aa1a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x869a69a6, 0xa1a69a6a,
        0x1a69a69a, 0xaa28a1aa, 0x69a69a69, 0x9a69aa1a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69aa286, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x555a2869, 0x55555555, 0x55555555, 0x55555555,
        0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x55555555, 0x55555555,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0xa69a6830, 0x0c30c30d,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x69a6830c, 0xda69a69a, 0xa69a69a0, 0x69a69a69,
        0x8369a69a, 0x924925a6, 0xa28a2868, 0x28a28a28, 0x8a28a28a, 0x0c30c30e,
        0xc30c30e8, 0x30c30c30, 0x0c30c30c, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa1a69a69,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0xc30c30c3, 0x30c3a030, 0x0c30c30c, 0xc30c30c3, 0x8a030c30, 0x0c30c30e,
        0x030e80c3, 0x30c30c3a, 0xa28a28a0, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a1a69, 0xc30c30c3, 0xa69a6830, 0xa2869a69,
        0x55555555, 0x85555555, 0x69aa28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa0369a69, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x0c30c369, 0x55555555, 0x85555555, 0x5e8a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69aa1a6, 0xa1a6a869, 0x9a69a69a, 0xa69a69a6, 0xa1a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x1a69a69a, 0xa69a6a8a, 0x69a69a69, 0xc30c30c3, 0x8a28a030, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0xc369a69a, 0x30c30c30, 0xa28a2868, 0x55555555, 0x85555555, 0x492a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x9a69a6a8, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69669, 0x1a69a696, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x9a69a6a8, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0xa2869a69,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0xa869a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x1aa1a6a8, 0xa6a86a8a, 0x69a69a69, 0x9aa1a69a, 0x86a869a6, 0xa28a286a,
        0x28a1aa28, 0x86a86a8a, 0x69a6a86a, 0x1aa1a6a8, 0x86a86a8a, 0x6a86a86a,
        0x1aa1a6a8, 0xa69a6a8a, 0x69a69aa1, 0x9aa1a69a, 0xa6a869a6, 0xa1aa1a69,
        0x9a69a69a, 0x869a69a6, 0x69a69a6a, 0x9a69a69a, 0xa69a69a6, 0xa28a2869,
        0xa869a6a8, 0x869a69a6, 0x69a69a6a, 0x9a69a69a, 0xa69a69a6, 0xa28a2869,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x28a2869a, 0x8a28a28a, 0xa28a28a2,
        0x59659659, 0x96596596, 0x86185965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x69a65965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0xa6596596, 0x86185a69, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x65965965, 0x59659659, 0x96596596, 0x65965965,
        0x59659659, 0x96596596, 0x86185965, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x59659658, 0x96596596, 0x65965965, 0x59659659, 0x96596596,
        0x21861861, 0x18618617, 0x86186186, 0x61861861, 0x18618618, 0x86169a86,
        0x61861861, 0x18618618, 0x86186186, 0xa1861861, 0x186185a6, 0x86185a86,
        0x5c71c861, 0xc8617218, 0x86185c71, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x75d75d76,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x6171c861, 0xc71c71c8, 0x71c71c71, 0x6186185c, 0x18618618, 0x86186186,
        0x61861861, 0xc71c71c8, 0x71c71c71, 0x1c71c71c, 0x185c71c7, 0x86185c86,
        0x2171c721, 0x186171c7, 0x72186186, 0x61861721, 0x18618618, 0x86186186,
        0x5a85a85a, 0xc8618618, 0x6a186185, 0x6185a6a1, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x9a69a69a, 0x186185a6, 0x86186186, 0x61861861, 0xa69a6a18, 0x69a69a69,
        0x5a69a69a, 0x18618618, 0x86186186, 0x9a69a861, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x169a69a6, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x1c861861, 0xc8618617, 0x86186185,
        0x61861861, 0x18618618, 0x86186186, 0x2186185c, 0x186185c7, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x9a861861, 0xa69a69a6, 0x86186169,
        0x61861861, 0x18618618, 0x86186186, 0x9a861861, 0x169a69a6, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x21861861, 0x186171c7, 0x71c71c72, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0x14534d36, 0x69a69a45,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61721861, 0x18618618, 0x86186186, 0x1c861861, 0x186185c7, 0x86186186,
        0x6186185c, 0x18618618, 0x86185c86, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x6169a69a, 0x18618618, 0x86186186,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x5a69a69a, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x9a69a69a, 0xa69a69a6, 0x86186169, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x186169a6, 0x86186186, 0x9a69a69a, 0x169a69a6, 0x86186186,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0x186169a6, 0x86186186, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x86169a69, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x9a69a69a, 0xa69a69a6, 0x72185c69, 0x61861861, 0xc71c8618, 0x71c71c71,
        0x61861861, 0x186185c8, 0x86186186, 0x1c71c71c, 0x171c71c7, 0x85c71c86,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18617218, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x21861861, 0x171c85c7, 0x86186172,
        0x61861861, 0x18618618, 0x71c72186, 0x1c71c721, 0xc71c71c7, 0x86171c71,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x6169a69a, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x1c721861, 0x18618617, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x1c71c71c, 0x186185c7, 0x86186186,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9aa1a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0x69a69a69, 0x9a69a69a, 0xa69a69a6, 0x69a69a69,
        0x9a69a69a, 0xa69a69a6, 0xa28a28a1, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x28a28a28, 0x8a28a28a, 0xa28a28a2, 0x55555555, 0x85555555, 0xa28a28a2,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0x86186186,
        0x61861861, 0x18618618, 0x86186186, 0x61861861, 0x18618618, 0xa2886186,
        0x28a280e8, 0x8a28a28a, 0xa28a28a2, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0xc30c30c3, 0x30c30c30, 0x0c30c30c,
        0xc30c30c3, 0x30c30c30, 0x0c30c30c, 0x28a28a28, 0x8a28a28a, 0xa28a28a2,
        0x00000000,
    ],
    bits: 6,
    default: 40,
};

pub(crate) static EAST_ASIAN_WIDTH: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0003, 0x0004, 0x0004,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0009, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011,
        0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0xffff, 0xffff, 0xffff, 0x001a,
        0xffff, 0xffff, 0x001b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001c, 0x001d, 0x001e,
        0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x0024,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x0025, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0026, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x0027,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x001d, 0x001d, 0x001d, 0x001d, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0029, 0xffff, 0x002a, 0x002b, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0x002c, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x002d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x002e, 0x002f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0030,
        0x001d, 0x001d, 0x0031, 0x001d, 0x001d, 0x0032, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0033, 0x0034, 0x0035, 0x0036,
        0x0037, 0xffff, 0x0038, 0x0039, 0x003a, 0x003b, 0x003c, 0x003d, 0x003e, 0x003f, 0xffff, 0x0040,
        0xffff, 0xffff, 0x0041, 0x001d, 0x0042, 0x0043, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d,
        0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x001d, 0x0044,
        0xffff, 0xffff, 0x0028, 0x0006, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028, 0x0028,
        0x0028, 0x0028, 0x0028, 0x0045,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6,
        0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0x16db6db6,
        0x00000000, 0x00000000, 0x00000000, 0x41369b48, 0x1249a4d0, 0x24904924,
        0x00040000, 0x00010000, 0x24000120, 0x49040009, 0x02410090, 0x04104920,
        0x00000008, 0x02080000, 0x00020000, 0x00240000, 0x02480002, 0x20000100,
        0x49001049, 0x02400082, 0x00000000, 0x00240000, 0x00000002, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x10410400, 0x00104104, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00080000, 0x00000000, 0x00000008, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x48201000, 0x00010082, 0x20824900, 0x00000000, 0x00000000, 0x00000000,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x00002492, 0x00000000,
        0x00000000, 0x92480000, 0x24924924, 0x09249209, 0x92480000, 0x24924924,
        0x09249209, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000008, 0x92490000, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x00082492, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x92010000, 0x00900904, 0x00249049, 0x82410000, 0x04020000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x10000000, 0x20000000,
        0x00001248, 0x00000000, 0x00000000, 0x10000000, 0x00000010, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x08008200, 0x02000000, 0x00000004, 0x00040048, 0x00000002, 0x00000000,
        0x00000000, 0x12000000, 0x04920000, 0x49249249, 0x92490002, 0x00000924,
        0x08000000, 0x92490000, 0x00000924, 0x00000000, 0x00000000, 0x00000900,
        0x00000000, 0x10400000, 0x00000000, 0x00200000, 0x00000000, 0x00000000,
        0x01200241, 0x80082002, 0x24804000, 0x49208201, 0x90000412, 0x00900024,
        0x01000000, 0x00400010, 0x00000000, 0x40249009, 0x00002402, 0x00000000,
        0x00240240, 0x80000000, 0x00000800, 0x00008000, 0x00000000, 0x20000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00400000, 0x0006c000, 0xd8000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xd8000000, 0x06030036, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x09249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92490002, 0x24924924, 0x49249249, 0x02492492, 0x00000000,
        0x49249249, 0x92402492, 0x00000000, 0x09249209, 0x02400000, 0x00900024,
        0x01240009, 0x00092402, 0x00000000, 0x00009240, 0x00002000, 0x0d800000,
        0x08048000, 0xb0002400, 0x04100001, 0x00000000, 0x00000000, 0x00000000,
        0xdb000041, 0x06db6db6, 0x00000000, 0x49209209, 0x00002090, 0x60000000,
        0x00000000, 0x06000000, 0x24000000, 0xc0000018, 0x00000006, 0x2d800000,
        0x4925b000, 0xb2492c92, 0x24924924, 0xc9000209, 0x96c92492, 0x2592c925,
        0xc0018000, 0x00000006, 0x00000000, 0x03000000, 0x00000000, 0x00800000,
        0x00000000, 0xb6000c30, 0x00000061, 0x00000000, 0x00000000, 0x24924924,
        0x00000000, 0x80000000, 0x0000006d, 0x00000000, 0x00030000, 0x60000000,
        0x00000000, 0x00000000, 0x00000000, 0x6db40000, 0x000002db, 0x00000000,
        0x00168000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00360000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x80030000, 0x00000925, 0x00000000, 0x00000000, 0x00000000,
        0xdb6db6db, 0xb6db6db6, 0x6db61b6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0x06db6db6, 0x00000000,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x00000001, 0x00000000, 0xb6db0000, 0x0006db6d,
        0xdb6db6dc, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x0db6db6d,
        0xdb6db6d8, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6d80d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6d8000, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6d86db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db0db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0x000006db, 0xb6db0000, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x0db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0x496db6db, 0xb6db2492, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xdb6db6db, 0xb6db0036, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0x000db6db, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xdb6db6db, 0xb6db6db6, 0x0036db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0x000006db, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0xb6db2492, 0x00001b6d, 0x00000000, 0xb6db0000, 0x6db6db6d,
        0xdb6db6db, 0xb0db6db6, 0x6db6db6d, 0xdb0db6db, 0x00000006, 0x00000000,
        0x24924920, 0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492,
        0x24924924, 0x49249249, 0x92492492, 0x92492494, 0x24924924, 0x49249249,
        0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924, 0x09249249,
        0x80492480, 0x24804924, 0x00248049, 0x92124924, 0x00000924, 0x00800000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x000036db, 0x001b0000, 0x00000000,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x0000006d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x00000001, 0x00000000, 0x00000000, 0x00000000,
        0x036db6db, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x86db0000, 0x0d86db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0x000000db, 0x00000000, 0x00000000,
        0x00000000, 0x00db0000, 0x00000000, 0x006db000, 0xb6db0000, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x0006db6d,
        0x00003000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00006000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x49249249, 0x92490000, 0x24924924, 0x49249249, 0x92490092, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x09249249, 0x92490000, 0x24924924,
        0x49249249, 0xb6d92c92, 0x2492db6d, 0x49249249, 0x00000012, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x000000db, 0xb6db0000, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x0006db6d,
        0x036db6db, 0x001b0000, 0x00000000, 0x0001b6db, 0x00000000, 0x00000000,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0x00000003, 0xb6db6d80, 0x6db6db61,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6c36db6d,
        0xdb6db6db, 0x06db6db6, 0x00000000, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0x06db6000, 0x00000000, 0xdb6db6db, 0x30036db6, 0x6db6db00,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x0db6db6d,
        0xdb6db6c3, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6036db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x01b6db6d,
        0x00000000, 0xb6db0db6, 0x6db6db6d, 0x006db6db, 0x00000000, 0x0000c000,
        0x00000000, 0x80000000, 0x0000000d, 0x00003000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x6db60000,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0x00006db6, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0x0001b6db, 0x80db0030, 0x6d80006d, 0x00000000, 0xb0000036, 0x0036db6d,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xdb6db6db, 0x00030006, 0x00000000,
        0x00000000, 0xb6db6db0, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db0db6d,
        0xdb61b6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x36db0000, 0x0036db00,
        0x000db6db, 0xb6db0000, 0x6db6db6d, 0xdb6db6db, 0xb6db0036, 0x0000db6d,
        0x0001b6db, 0xb6db0000, 0x00001b6d, 0x006db6db, 0xb6db0000, 0x0000000d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x6db6db6d,
        0xdb6db6db, 0xb6db6db6, 0x6db6db6d, 0xdb6db6db, 0xb6db6db6, 0x01b6db6d,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x24924924,
        0x49249249, 0x92492492, 0x24924924, 0x49249249, 0x92492492, 0x00924924,
        0x00000000,
    ],
    bits: 3,
    default: 0,
};

pub(crate) static PROP_WHITE_SPACE: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00003e00, 0x00000001, 0x00000000, 0x00000000, 0x00000020, 0x00000001,
        0x00000000, 0x00000000, 0x00000001, 0x00000000, 0x00000000, 0x00000000,
        0x000007ff, 0x00008300, 0x80000000, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_ALPHABETIC: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0005, 0x0002, 0x0006, 0x0007, 0x0008,
        0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014,
        0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x0002, 0x0002,
        0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x0002, 0x0002, 0x0002, 0x0024, 0x0025, 0x0026, 0x0027,
        0x0028, 0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0002, 0x0032,
        0x0002, 0x0002, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0039, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x003a, 0x003b, 0x003c, 0x003d, 0xffff, 0xffff, 0xffff,
        0x003e, 0x003f, 0x0040, 0x0041, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0042,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0043, 0x0002, 0x0002, 0x0044, 0x0045, 0x0046, 0x0047,
        0x0048, 0x0049, 0x004a, 0x004b, 0x004c, 0x004d, 0x004e, 0x004f, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0050,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0051, 0x0052, 0x0053, 0x0054,
        0x0002, 0x0002, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005a, 0x005b, 0x005c, 0x005d, 0xffff,
        0xffff, 0x005e, 0x005f, 0x0060, 0x0002, 0x0061, 0x0062, 0x0063, 0x0002, 0x0002, 0x0064, 0x0065,
        0x0066, 0x0067, 0x0068, 0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0x006e, 0x006f, 0x0070, 0xffff,
        0xffff, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007a, 0xffff,
        0x007b, 0x007c, 0xffff, 0x007d, 0x007e, 0x007f, 0x0080, 0xffff, 0x0081, 0x0082, 0x0083, 0x0084,
        0x0085, 0x0086, 0xffff, 0xffff, 0x0087, 0x0088, 0x0089, 0x008a, 0xffff, 0x008b, 0xffff, 0x008c,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x008d, 0x008e, 0x0002, 0x008f, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0090, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0091, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0092, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0093, 0x0094, 0x0095, 0x0096, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0097, 0xffff, 0x0098, 0x0099, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x009a, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x009b, 0x0038, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x009c,
        0x0002, 0x0002, 0x009d, 0x0002, 0x0002, 0x009e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x009f, 0x00a0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00a1, 0x00a2, 0x00a3, 0x0002, 0x0002, 0x00a4, 0x00a5, 0x00a6, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00a7, 0xffff,
        0x00a8, 0xffff, 0x00a9, 0xffff, 0xffff, 0x00aa, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00ab, 0x0002, 0x00ac, 0x00ad, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x00ae, 0x00af, 0xffff, 0xffff, 0xffff, 0xffff, 0x00b0, 0x00b1,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x00b2, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b3, 0x0002,
        0x00b4, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b5, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b6, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00b7, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x00b8, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x07fffffe, 0x07fffffe, 0x00000000, 0x04200400,
        0xff7fffff, 0xff7fffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x0003ffc3, 0x0000501f, 0x00000000, 0x00000000,
        0x00000020, 0xbcdf0000, 0xffffd740, 0xfffffffb, 0xffffffff, 0xffbfffff,
        0xfffffc03, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffff,
        0x027fffff, 0xffffffff, 0x000001ff, 0xbfff0000, 0xffff00b6, 0x000787ff,
        0x07ff0000, 0xffffffff, 0xfeffffff, 0xffffc000, 0xffffffff, 0xffffffff,
        0x1fefffff, 0x9c00e1fe, 0xffff0000, 0xffffffff, 0xffffe000, 0xffffffff,
        0xffffffff, 0x0003ffff, 0xfffffc00, 0x043007ff, 0xfcffffff, 0x00001fff,
        0x01ffffff, 0xffff07ff, 0x00007eff, 0xffffffff, 0xfff003ff, 0xffff03f8,
        0xffffffff, 0xefffffff, 0xffe1dfff, 0xfffe000f, 0xfff99fef, 0xe3c5fdff,
        0xb080599f, 0x1003000f, 0xfff987ee, 0xc36dfdff, 0x5e021987, 0x003f0000,
        0xfffbbfee, 0xe3edfdff, 0x00011bbf, 0x1e00000f, 0xfff99fee, 0xe3edfdff,
        0xb0c0199f, 0x0002000f, 0xd63dc7ec, 0xc3ffc718, 0x00811dc7, 0x00000000,
        0xfffddfef, 0xe3fffdff, 0x27601ddf, 0x0000000f, 0xfffddfef, 0xe3effdff,
        0x60601ddf, 0x0006000f, 0xfffddfff, 0xe7ffffff, 0x80f05ddf, 0xfc00000f,
        0xfc7fffee, 0x2ffbffff, 0xff5f807f, 0x000c0000, 0xfffffffe, 0x07ffffff,
        0x0000207f, 0x00000000, 0xfffff7d6, 0x3bffffaf, 0xf000205f, 0x00000000,
        0x00000001, 0x00000000, 0xfffffeff, 0xfffe1fff, 0xfeffff03, 0x1fffffff,
        0x00000000, 0x00000000, 0xffffffff, 0xf97fffff, 0xffff0000, 0xffffffff,
        0x3c00ffff, 0xffffffff, 0xffff20bf, 0xf7ffffff, 0xffffffff, 0xffffffff,
        0x3d7f3dff, 0xffffffff, 0xffff3dff, 0x7f3dffff, 0xff7fff3d, 0xffffffff,
        0xff3dffff, 0xffffffff, 0x07ffffff, 0x00000000, 0x0000ffff, 0xffffffff,
        0xffffffff, 0x3f3fffff, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff9fff, 0x07fffffe, 0xffffffff,
        0xffffffff, 0x01ffc7ff, 0x800fffff, 0x000fffff, 0x000fffff, 0x000ddfff,
        0xffffffff, 0xffcfffff, 0x108001ff, 0x00000000, 0x00000000, 0xffffffff,
        0xffffffff, 0x01ffffff, 0xffffffff, 0xffff07ff, 0xffffffff, 0x003fffff,
        0x7fffffff, 0x01ff0fff, 0xffff0000, 0x001f3fff, 0xffffffff, 0xffff0fff,
        0x000003ff, 0x00000000, 0x0fffffff, 0xffffffff, 0x7fffffff, 0x001ffffe,
        0x00000000, 0x80000080, 0x00007001, 0x00000000, 0xffffffff, 0xffefffff,
        0x00001fef, 0x00000000, 0xffffffff, 0xfc00f3ff, 0xffffffff, 0x0003ffbf,
        0xffffffff, 0x007fffff, 0xfc00e000, 0x3fffffff, 0xffff01ff, 0xe7ffffff,
        0x00000000, 0x046fde00, 0xffffffff, 0xffffffff, 0x00000000, 0x001fff80,
        0x3f3fffff, 0xffffffff, 0xaaff3f3f, 0x3fffffff, 0xffffffff, 0x5fdfffff,
        0x0fcf1fdc, 0x1fdc1fff, 0x00000000, 0x00000000, 0x00000000, 0x80020000,
        0x1fff0000, 0x00000000, 0x00000000, 0x00000000, 0x3e2ffc84, 0xf3ffbd50,
        0x000043e0, 0xffffffff, 0x000001ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xffc00000, 0xffffffff, 0x000003ff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x000c781f, 0xffffffff, 0xffff20bf, 0xffffffff, 0x000080ff,
        0x007fffff, 0x7f7f7f7f, 0x7f7f7f7f, 0xffffffff, 0x00000000, 0x00008000,
        0x00000000, 0x00000000, 0x000000e0, 0x1f3e03fe, 0xfffffffe, 0xffffffff,
        0xe07fffff, 0xfffffffe, 0xffffffff, 0xf7ffffff, 0xffffffe0, 0xfffeffff,
        0xffffffff, 0xffffffff, 0x00007fff, 0xffffffff, 0x00000000, 0xffff0000,
        0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00001fff, 0x00000000,
        0xffff0000, 0x3fffffff, 0xffff1fff, 0x00000c00, 0xffffffff, 0x8ff07fff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x0000ffff, 0xff800000, 0xfffffffc,
        0xffffffff, 0xffffffff, 0xfffff9ff, 0xffffffff, 0x03eb07ff, 0xfffc0000,
        0xffffffbf, 0x000000ff, 0xffffffff, 0x000fffff, 0xffffffff, 0xffffffff,
        0x0000002f, 0xe8fc0000, 0xfffffc00, 0xffff07ff, 0x0007ffff, 0x1fffffff,
        0xffffffff, 0xfff7ffff, 0x00008000, 0x7c00ffff, 0xffffffff, 0x007fffff,
        0x00003fff, 0xfc7fffff, 0xffffffff, 0x7fffffff, 0x38000005, 0x003cffff,
        0x007e7e7e, 0xffff7f7f, 0xf7ffffff, 0xffff03ff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x000007ff, 0xffffffff, 0xffff000f, 0xfffff87f, 0x0fffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff3fff, 0xffffffff, 0xffffffff,
        0x03ffffff, 0x00000000, 0xe0f8007f, 0x5f7ffdff, 0xffffffdb, 0xffffffff,
        0xffffffff, 0x0003ffff, 0xfff80000, 0xffffffff, 0xffffffff, 0x3fffffff,
        0xffff0000, 0xffffffff, 0xfffcffff, 0xffffffff, 0x000000ff, 0x0fff0000,
        0x00000000, 0x00000000, 0x00000000, 0xffdf0000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x1fffffff, 0x00000000, 0x07fffffe, 0x07fffffe, 0xffffffc0,
        0xffffffff, 0x7fffffff, 0x1cfcfcfc, 0x00000000, 0xffffefff, 0xb7ffff7f,
        0x3fff3fff, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0x07ffffff,
        0x00000000, 0x00000000, 0xffffffff, 0x001fffff, 0x1fffffff, 0xffffffff,
        0x0001ffff, 0x00000000, 0xffffffff, 0xffffe000, 0xffff07ff, 0x07ffffff,
        0x3fffffff, 0xffffffff, 0x003eff0f, 0x00000000, 0x3fffffff, 0xffff0000,
        0xff0fffff, 0x0fffffff, 0xffffffff, 0xffff00ff, 0xffffffff, 0xf7ff000f,
        0xffb7f7ff, 0x1bfbfffb, 0x00000000, 0x00000000, 0xffffffff, 0x007fffff,
        0x003fffff, 0x000000ff, 0xffffffbf, 0x07fdffff, 0x00000000, 0x00000000,
        0xfffffd3f, 0x91bfffff, 0x003fffff, 0x007fffff, 0x7fffffff, 0x00000000,
        0x00000000, 0x0037ffff, 0x003fffff, 0x03ffffff, 0x00000000, 0x00000000,
        0xffffffff, 0xc0ffffff, 0x00000000, 0x00000000, 0xfeeff06f, 0x003fffff,
        0x00000000, 0x1fffffff, 0x1fffffff, 0x00000000, 0xfffffeff, 0x0000001f,
        0xffffffff, 0x003fffff, 0x003fffff, 0x0007ffff, 0x0003ffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x000001ff, 0x00000000,
        0xffffffff, 0x0007ffff, 0xffffffff, 0x0007ffff, 0xffffffff, 0x000000ff,
        0x00000000, 0x00000000, 0xffffffff, 0x00031bff, 0x00000000, 0x00000000,
        0x1fffffff, 0xffff0080, 0x0000003f, 0xffff0000, 0x00000003, 0xffff0000,
        0x0000001f, 0x007fffff, 0xffffffff, 0xffffffff, 0x0000003f, 0x003e0000,
        0xfffffffc, 0x01ffffff, 0xffff0004, 0x000001ff, 0xffffffff, 0x0007ffff,
        0xffff00f0, 0x0047ffff, 0xffffffff, 0xffffffff, 0x1400c01e, 0x00000000,
        0xfffbffff, 0x409fffff, 0x00000000, 0x00000000, 0xbfffbd7f, 0xffff01ff,
        0xffffffff, 0x000001ff, 0xfff99fef, 0xe3edfdff, 0xe081199f, 0x0000000f,
        0xffffffff, 0xffffffff, 0x800007bb, 0x00000003, 0xffffffff, 0xffffffff,
        0x000000b3, 0x00000000, 0xffffffff, 0x7f3fffff, 0x3f000000, 0x00000000,
        0xffffffff, 0x7fffffff, 0x00000011, 0x00000000, 0xffffffff, 0x013fffff,
        0x00000000, 0x00000000, 0xe7ffffff, 0x000007ff, 0x0000007f, 0x00000000,
        0xffffffff, 0x01ffffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff,
        0xffffffff, 0x80000000, 0xff6ff27f, 0x99bfffff, 0x00000007, 0x00000000,
        0x00000000, 0xfffffcff, 0xfcffffff, 0x0000001a, 0xffffffff, 0x7fe7ffff,
        0xffff0000, 0xffffffff, 0x20ffffff, 0xffff0000, 0xffffffff, 0x01ffffff,
        0xfffffdff, 0x7f7fffff, 0x00000001, 0xfffc0000, 0xfffcffff, 0x007ffeff,
        0x00000000, 0x00000000, 0xfffffb7f, 0xb47fffff, 0x000000cb, 0xfffffdbf,
        0x017b7fff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x007fffff, 0x00000000, 0x00010000, 0x00000000, 0x00000000,
        0x03ffffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00007fff, 0xffffffff, 0xffffffff, 0x0000000f, 0x00000000,
        0xffff0000, 0xffffffff, 0xffffffff, 0x0001ffff, 0xffffffff, 0x00007fff,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x0000007f, 0x00000000,
        0xffffffff, 0x01ffffff, 0x7fffffff, 0xffff0000, 0xffffffff, 0x7fffffff,
        0xffff0000, 0x00003fff, 0xffffffff, 0x0000ffff, 0x0000000f, 0xe0fffff8,
        0x0000ffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffff87ff, 0xffffffff,
        0xffff80ff, 0x00000000, 0x00000000, 0x0003000b, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00ffffff, 0xffffffff, 0xffffffff, 0x003fffff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x6fef0000, 0xffffffff, 0x00000007,
        0x00070000, 0xffff00f0, 0xffffffff, 0xffffffff, 0xffffffff, 0x0fffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x1fff07ff, 0x43ff01ff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffdfffff, 0xffffffff,
        0xdfffffff, 0xebffde64, 0xffffffef, 0xffffffff, 0xdfdfe7bf, 0x7bffffff,
        0xfffdfc5f, 0xffffffff, 0xffffffff, 0xffffff3f, 0xf7fffffd, 0xf7ffffff,
        0xffdfffff, 0xffdfffff, 0xffff7fff, 0xffff7fff, 0xfffffdff, 0xfffffdff,
        0x00000ff7, 0x00000000, 0x7fffffff, 0x00000000, 0x00000000, 0x00000000,
        0xf9ffff7f, 0x000007db, 0x00000000, 0x00000000, 0xffffffff, 0x3f801fff,
        0x00004000, 0x00000000, 0xffff0000, 0x00003fff, 0xffffffff, 0x00000fff,
        0x00000000, 0x00000000, 0x00000000, 0x7fff6f7f, 0xffffffff, 0xffffffff,
        0x0000001f, 0x00000000, 0xffffffff, 0xffffffff, 0x0000088f, 0x00000000,
        0xffffffef, 0x0af7fe96, 0xaa96ea84, 0x5ef7f796, 0x0ffffbff, 0x0ffffbee,
        0x00000000, 0x00000000, 0x00000000, 0xffff0000, 0xffff03ff, 0xffff03ff,
        0x000003ff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00000000, 0xffffffff, 0x01ffffff, 0xffffffff, 0xffffffff,
        0x3fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffff0003,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000001,
        0x3fffffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0x000007ff, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_LOWERCASE: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x000d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000b, 0x000e, 0x000f,
        0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0018, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0019, 0x001a, 0x001b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001c, 0x001d, 0x001e, 0x001f,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0020, 0x000f, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0021, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0023, 0x0024, 0xffff, 0x0025, 0xffff, 0xffff, 0xffff, 0x0026,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0027, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0028, 0xffff, 0xffff,
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
        0x0029, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0032, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0033, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x07fffffe, 0x00000000, 0x04200400,
        0x80000000, 0xff7fffff, 0xaaaaaaaa, 0x55aaaaaa, 0xaaaaab55, 0xd4aaaaaa,
        0x4e243129, 0xe6512d2a, 0xb5555240, 0xaa29aaaa, 0xaaaaaaaa, 0x93faaaaa,
        0xffffaa85, 0xffffffff, 0xffefffff, 0x01ffffff, 0x00000003, 0x0000001f,
        0x00000000, 0x00000000, 0x00000020, 0x3c8a0000, 0x00010000, 0xfffff000,
        0xaae37fff, 0x192faaaa, 0x00000000, 0xffff0000, 0xffffffff, 0xaaaaaaaa,
        0xaaaaa802, 0xaaaaaaaa, 0xaaaad554, 0xaaaaaaaa, 0xaaaaaaaa, 0x0000aaaa,
        0x00000000, 0xffffffff, 0x000001ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0000, 0xe7ffffff, 0x00000000, 0x00000000,
        0x00000000, 0x3f000000, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0xaaaaaaaa, 0xaaaaaaaa,
        0xaaaaaaaa, 0xaaaaaaaa, 0xbfeaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa,
        0x003f00ff, 0x00ff00ff, 0x00ff003f, 0x3fff00ff, 0x00ff00ff, 0x40df00ff,
        0x00cf00dc, 0x00dc00ff, 0x00000000, 0x00000000, 0x00000000, 0x80020000,
        0x1fff0000, 0x00000000, 0x00000000, 0x00000000, 0x0008c400, 0x32108000,
        0x000043c0, 0xffff0000, 0x00000010, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0000, 0x000003ff, 0x00000000, 0xffff0000,
        0xffffffff, 0x3fda1562, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0x0008501a,
        0xffffffff, 0x000020bf, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xaaaaaaaa, 0x00002aaa, 0x3aaaaaaa, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xaaabaaa8, 0xaaaaaaaa, 0x95ffaaaa, 0xaaba50aa, 0xaaa082aa,
        0x02aa050a, 0x07400000, 0x00000000, 0xffff0000, 0xf7ffffff, 0xffff01ff,
        0x00f8007f, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x07fffffe, 0x00000000, 0x00000000, 0xffffff00, 0x0000ffff, 0x00000000,
        0x00000000, 0x00000000, 0xff000000, 0x0fffffff, 0xff800000, 0x1bfbfffb,
        0x00000000, 0x00000000, 0xffffffb9, 0x07fdffff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0x0007ffff, 0x00000000, 0x00000000,
        0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff,
        0xfc000000, 0x000fffff, 0xffdfc000, 0x000000ff, 0x0ffffffc, 0xebc00000,
        0x0000ffef, 0xfffffc00, 0xc000000f, 0x00ffffff, 0xfffc0000, 0x00000fff,
        0xffffffc0, 0xfc000000, 0x000fffff, 0xffffc000, 0x000000ff, 0x0ffffffc,
        0xffc00000, 0x0000ffff, 0xfffffc00, 0x0000003f, 0xf7fffffc, 0xf0000003,
        0x0fdfffff, 0xffc00000, 0x003f7fff, 0xffff0000, 0x0000fdff, 0xfffffc00,
        0x00000bf7, 0x00000000, 0x7ffffbff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfffffffc, 0x0000000f, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_UPPERCASE: Trie = Trie {
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
        0x0022, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027, 0x0028, 0x0029, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002b, 0x002c,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x07fffffe, 0x00000000, 0x00000000, 0x00000000,
        0x7f7fffff, 0x00000000, 0x55555555, 0xaa555555, 0x555554aa, 0x2b555555,
        0xb1dbced6, 0x11aed2d5, 0x4aaaa490, 0x55d25555, 0x55555555, 0x6c055555,
        0x0000557a, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80450000,
        0xfffed740, 0x00000ffb, 0x551c8000, 0xe6905555, 0xffffffff, 0x0000ffff,
        0x00000000, 0x55555555, 0x55555401, 0x55555555, 0x55552aab, 0x55555555,
        0x55555555, 0xfffe5555, 0x007fffff, 0x00000000, 0x00000000, 0xffffffff,
        0x000020bf, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x003fffff,
        0xffff0000, 0xe7ffffff, 0x00000000, 0x00000000, 0x55555555, 0x55555555,
        0x55555555, 0x55555555, 0x40155555, 0x55555555, 0x55555555, 0x55555555,
        0x3f00ff00, 0xff00ff00, 0xaa003f00, 0x0000ff00, 0x00000000, 0x0f000000,
        0x0f000f00, 0x0f001f00, 0x3e273884, 0xc00f3d50, 0x00000020, 0x0000ffff,
        0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffc00000,
        0x0000ffff, 0x00000000, 0xffffffff, 0x0000ffff, 0x00000000, 0xc025ea9d,
        0x55555555, 0x55555555, 0x55555555, 0x00042805, 0x00000000, 0x00000000,
        0x55555555, 0x00001555, 0x05555555, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x55545554, 0x55555555, 0x6a005555, 0x55452855, 0x555f7d55,
        0x014102f5, 0x00200000, 0x00000000, 0x07fffffe, 0x00000000, 0x00000000,
        0xffffffff, 0x000000ff, 0x00000000, 0x00000000, 0x00000000, 0xffff0000,
        0x000fffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xf7ff0000,
        0x0037f7ff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x0007ffff,
        0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0x00000000, 0x03ffffff, 0xfff00000,
        0x00003fff, 0xffffff00, 0xd0000003, 0x003fde64, 0xffff0000, 0x000003ff,
        0x1fdfe7b0, 0x7b000000, 0x0001fc5f, 0xfffff000, 0x0000003f, 0x03ffffff,
        0xfff00000, 0x00003fff, 0xffffff00, 0xf0000003, 0x003fffff, 0xffff0000,
        0x000003ff, 0xffffff00, 0x00000001, 0x07fffffc, 0xf0000000, 0x001fffff,
        0xffc00000, 0x00007fff, 0xffff0000, 0x000001ff, 0x00000400, 0x00000000,
        0xffffffff, 0x00000003, 0x00000000, 0x00000000, 0x00000000, 0xffff0000,
        0xffff03ff, 0xffff03ff, 0x000003ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_CASED: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0002, 0x0004, 0x0005, 0x0006, 0x0002, 0x0007, 0x0008, 0x0009,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000a, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x000b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000c, 0x0002, 0x000d,
        0x0002, 0x0002, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0014, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0015, 0x0016, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0017, 0x0018, 0x0019, 0x001a,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001b, 0x000d, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001c, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x001e, 0x001f, 0x0020, 0x0021, 0xffff, 0xffff, 0xffff, 0x0022,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0023, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0024, 0xffff, 0xffff,
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
        0x0025, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0x0026, 0x0027, 0x0028, 0x0002, 0x0002, 0x0029, 0x002a, 0x002b, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002c, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002e, 0x002f,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x07fffffe, 0x07fffffe, 0x00000000, 0x04200400,
        0xff7fffff, 0xff7fffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xf7ffffff, 0xfffffff0, 0xffffffff, 0xffefffff, 0x01ffffff,
        0x00000003, 0x0000001f, 0x00000000, 0x00000000, 0x00000020, 0xbccf0000,
        0xffffd740, 0xfffffffb, 0xffffffff, 0xffbfffff, 0xfffffc03, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffff, 0x007fffff, 0xffffffff,
        0x000001ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff,
        0xffff20bf, 0xe7ffffff, 0x00000000, 0xffffffff, 0xffffffff, 0x3f3fffff,
        0xffff01ff, 0xe7ffffff, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0x00000000, 0x00000000, 0x3f3fffff, 0xffffffff, 0xaaff3f3f, 0x3fffffff,
        0xffffffff, 0x5fdfffff, 0x0fcf1fdc, 0x1fdc1fff, 0x00000000, 0x00000000,
        0x00000000, 0x80020000, 0x1fff0000, 0x00000000, 0x00000000, 0x00000000,
        0x3e2ffc84, 0xf21fbd50, 0x000043e0, 0xffffffff, 0x00000018, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xffc00000, 0xffffffff, 0x000003ff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x000c781f, 0xffffffff, 0x000020bf,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x00003fff,
        0x3fffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfffffffc,
        0xffffffff, 0xffffffff, 0xffff78ff, 0xffffffff, 0x03eb07ff, 0x07600000,
        0x00000000, 0xffff0000, 0xf7ffffff, 0xffff01ff, 0x00f8007f, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x07fffffe, 0x07fffffe, 0x00000000,
        0xffffffff, 0xffffffff, 0x0000ffff, 0x00000000, 0x00000000, 0xffff0000,
        0xff0fffff, 0x0fffffff, 0x00000000, 0x00000000, 0x00000000, 0xf7ff0000,
        0xffb7f7ff, 0x1bfbfffb, 0x00000000, 0x00000000, 0xffffffb9, 0x07fdffff,
        0x00000000, 0x00000000, 0xffffffff, 0x0007ffff, 0xffffffff, 0x0007ffff,
        0x00000000, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffdfffff, 0xffffffff,
        0xdfffffff, 0xebffde64, 0xffffffef, 0xffffffff, 0xdfdfe7bf, 0x7bffffff,
        0xfffdfc5f, 0xffffffff, 0xffffffff, 0xffffff3f, 0xf7fffffd, 0xf7ffffff,
        0xffdfffff, 0xffdfffff, 0xffff7fff, 0xffff7fff, 0xfffffdff, 0xfffffdff,
        0x00000ff7, 0x00000000, 0x7ffffbff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x0000000f, 0x00000000, 0x00000000, 0xffff0000,
        0xffff03ff, 0xffff03ff, 0x000003ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_CASE_IGNORABLE: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0002, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0x0002, 0x0003, 0x0004, 0xffff, 0x0005, 0x0006, 0x0007,
        0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013,
        0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0xffff, 0xffff,
        0xffff, 0xffff, 0x001e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001f, 0x0020,
        0x0021, 0x0022, 0x0023, 0xffff, 0x0024, 0x0025, 0x0026, 0x0027, 0x0028, 0x0029, 0x002a, 0x002b,
        0xffff, 0xffff, 0xffff, 0x002c, 0x002d, 0x002e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x002f, 0x0030, 0x0031, 0x0032, 0x0033, 0xffff, 0xffff, 0xffff,
        0x0034, 0x0035, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0036, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0037, 0xffff, 0xffff, 0x0038, 0x0039, 0x003a, 0x003b,
        0x003c, 0x003d, 0x003e, 0x003f, 0x0040, 0x0041, 0x0042, 0x0043, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0044, 0x0045,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0046, 0x0047, 0x0048, 0x0049, 0xffff, 0xffff, 0xffff, 0x004a,
        0xffff, 0x004b, 0x004c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x004d,
        0xffff, 0xffff, 0xffff, 0xffff, 0x004e, 0x004f, 0xffff, 0xffff, 0xffff, 0xffff, 0x0050, 0xffff,
        0xffff, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005a, 0xffff,
        0x005b, 0x005c, 0xffff, 0x005d, 0x005e, 0x005f, 0x0060, 0xffff, 0x0061, 0xffff, 0x0062, 0x0063,
        0x0064, 0x0065, 0xffff, 0xffff, 0x0066, 0x0067, 0x0068, 0x0069, 0xffff, 0x006a, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x006b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x006c, 0x006d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x006e, 0x006f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0070,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0071, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0072, 0xffff, 0xffff, 0xffff, 0x0073, 0x0074, 0x0075, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0076, 0x0077, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0078, 0xffff, 0x0079, 0xffff, 0xffff, 0x007a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x007b, 0x007c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x007d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x007e, 0xffff, 0x007f, 0x0080, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x04004080, 0x40000000, 0x00000001, 0x00000000, 0x0190a100,
        0x00000000, 0x00000000, 0x00000000, 0xffff0000, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x0430ffff, 0x000000b0, 0x00000000,
        0x00000000, 0x00000000, 0x000003f8, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x82000000, 0x00000000, 0xfffe0000, 0xbfffffff,
        0x000000b6, 0x00100000, 0x17ff003f, 0x00000000, 0xfffff801, 0x00010000,
        0x00000000, 0x00000000, 0xbfc00000, 0x00003dff, 0x00028000, 0xffff0000,
        0x000007ff, 0x00000000, 0x00000000, 0x0001ffc0, 0x00000000, 0x243ff800,
        0xffc00000, 0x00003fff, 0x0e000000, 0x00000000, 0xff030100, 0x00000000,
        0xfffffe00, 0xffffffff, 0x00000007, 0x14000000, 0x00fe21fe, 0x0002000c,
        0x00000002, 0x10000000, 0x0000201e, 0x4000000c, 0x00000006, 0x10000000,
        0x00023986, 0x00230000, 0x00000006, 0x10000000, 0x000021be, 0xfc00000c,
        0x00000002, 0x90000000, 0x0060201e, 0x0000000c, 0x00000004, 0x00000000,
        0x00002001, 0x00000000, 0x00000011, 0xd0000000, 0x00603dc1, 0x0000000c,
        0x00000002, 0x90000000, 0x00003040, 0x0000000c, 0x00000003, 0x18000000,
        0x0000201e, 0x0000000c, 0x00000002, 0x00000000, 0x005c0400, 0x00000000,
        0x00000000, 0x07f20000, 0x00007fc0, 0x00000000, 0x00000000, 0x1ff20000,
        0x00003f40, 0x00000000, 0x03000000, 0x02a00000, 0x00000000, 0x7ffe0000,
        0xfeffe0df, 0x1fffffff, 0x00000040, 0x00000000, 0x00000000, 0x66fde000,
        0xc3000000, 0x001e0001, 0x20002064, 0x00000000, 0x00000000, 0x10000000,
        0x00000000, 0x00000000, 0xe0000000, 0x00000000, 0x001c0000, 0x000c0000,
        0x000c0000, 0x000c0000, 0x00000000, 0x3fb00000, 0x208ffe40, 0x00000000,
        0x0000f800, 0x00000000, 0x00000008, 0x00000000, 0x00000060, 0x00000200,
        0x00000000, 0x00000000, 0x00000000, 0x0e040187, 0x00000000, 0x00000000,
        0x09800000, 0x00000000, 0x7f400000, 0x9ff81fe5, 0x00000000, 0xffff0080,
        0x00007fff, 0x00000000, 0x0000000f, 0x17d00000, 0x00000004, 0x000ff800,
        0x00000003, 0x00003b3c, 0x00000000, 0x0003a340, 0x00000000, 0x00cff000,
        0x00000000, 0x3f000000, 0x00000000, 0x00000000, 0xfff70000, 0x031021fd,
        0x00000000, 0xfffff000, 0xffffffff, 0x010007ff, 0xf8000000, 0xffffffff,
        0xffffffff, 0xffffffff, 0x00000000, 0xa0000000, 0xe000e003, 0x6000e000,
        0x0300f800, 0x00007c90, 0x00000000, 0x8002ffdf, 0x1fff0000, 0x00000000,
        0xffff0000, 0x0001ffff, 0x00000000, 0x00000000, 0x00000000, 0x30000000,
        0x00000000, 0x00000000, 0x00000000, 0x00038000, 0x00000000, 0x00000000,
        0x00000000, 0x80008000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff,
        0x00000000, 0x00008000, 0x00000000, 0x00000000, 0x00000020, 0x083e3c00,
        0x00000000, 0x00000000, 0x7e000000, 0x00000000, 0x00000000, 0x70000000,
        0x00200000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x3f000000, 0x00001000, 0x00000000, 0x00000000, 0xbff78000,
        0xf0000000, 0x00000000, 0x00000000, 0x00030000, 0xffffffff, 0x00000003,
        0x00000000, 0x00010000, 0x00000700, 0x00000000, 0x00000000, 0x031c0000,
        0x00000844, 0x00001060, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000030, 0x8003ffff, 0x00000000, 0x00003fc0, 0x0003ff80, 0x00000000,
        0x00000007, 0x33c80000, 0x00008000, 0x00000060, 0x00000000, 0x00667e00,
        0x00001008, 0x10010000, 0x00000000, 0xc19d0000, 0x20000002, 0x00583000,
        0x00000000, 0x00000000, 0xf8000000, 0x00000e00, 0x00000000, 0x00000000,
        0x00000000, 0x00002120, 0x40000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfffc0000, 0x00000007, 0x00000000, 0x0008ffff, 0x0000ffff,
        0x00240000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,
        0x04004080, 0x40000000, 0x00000001, 0x00010000, 0xc0000000, 0x00000000,
        0x00000000, 0x0e000008, 0x00000000, 0x00000000, 0x00000000, 0x20000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000000, 0x00000000,
        0x00000000, 0x07c00000, 0xffffffbf, 0x07fdffff, 0x00000000, 0x00000000,
        0x0000f06e, 0x87000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000060, 0x00000000, 0x000000f0, 0x00000000, 0x00000000,
        0x00000000, 0x00001800, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0001ffc0, 0x00000000, 0x0000003c, 0x00000000, 0x00000000, 0x00000000,
        0x00000002, 0xff000000, 0x0000007f, 0x80190000, 0x00000003, 0x26780000,
        0x00002004, 0x00000000, 0x00000007, 0x001fef80, 0x00000000, 0x00080000,
        0x00000003, 0x7fc00000, 0x00009e00, 0x00000000, 0x00000000, 0x40d38000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000, 0x000007f8,
        0x00000003, 0x18000000, 0x00000001, 0x001f1fc0, 0x00000000, 0xff000000,
        0x4000005c, 0x00000000, 0x00000000, 0x85f80000, 0x0000000d, 0x00000000,
        0x00000000, 0xb03c0000, 0x30000001, 0x00000000, 0x00000000, 0xa7f80000,
        0x00000001, 0x00000000, 0x00000000, 0x00bf2800, 0x00000000, 0x00000000,
        0xe0000000, 0x00000fbc, 0x00000000, 0x00000000, 0x00000000, 0x06ff8000,
        0x00000000, 0x00000000, 0x00000000, 0x58000000, 0x00000008, 0x00000000,
        0x00000000, 0x00000000, 0x0cf00000, 0x00000001, 0x000007fe, 0x79f80000,
        0x0e7e0080, 0x00000000, 0x037ffc00, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xbf7f0000, 0x00000000, 0x00000000, 0xfffc0000, 0x006dfcff,
        0x00000000, 0x00000000, 0x00000000, 0xb47e0000, 0x000000bf, 0x00000000,
        0x00a30000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00180000, 0x00000000, 0x01ff0000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x001f0000, 0x00000000, 0x007f0000,
        0x0000000f, 0x00000000, 0x00000000, 0x00000000, 0x00008000, 0x00000000,
        0xffff8000, 0x00000000, 0x00000000, 0x0000001b, 0x00000000, 0x00000000,
        0x00000000, 0x6fef0000, 0x60000000, 0x0000000f, 0x00000000, 0x00000000,
        0xffffffff, 0xffff3fff, 0x0000007f, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xfff80380, 0x00000fe7, 0x00003c00, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x0000001c, 0x00000000, 0xffffffff, 0xf87fffff,
        0xffffffff, 0x00201fff, 0xf8000010, 0x0000fffe, 0x00000000, 0x00000000,
        0xf9ffff7f, 0x000007db, 0x00000000, 0x00000000, 0x00000000, 0x3fff0000,
        0x00000000, 0x00000000, 0x00000000, 0x00004000, 0x00000000, 0x0000f000,
        0x00000000, 0x00000000, 0x007f0000, 0x00000000, 0x00000000, 0x00000000,
        0x00000ff0, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xf8000000,
        0x00000002, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x0000ffff,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_MATH: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0008, 0x0009, 0x000a,
        0xffff, 0xffff, 0xffff, 0x000b, 0x000c, 0xffff, 0xffff, 0x000d, 0xffff, 0xffff, 0x0008, 0x0008,
        0x0008, 0x0008, 0x000e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000f, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0010, 0xffff, 0x0011, 0x0012, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0x0013, 0x0014, 0x0015, 0x0008, 0x0008, 0x0016, 0x0008, 0x0017, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0018, 0x0019, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x70000800, 0x40000000, 0x50000000, 0x00000000, 0x00021000,
        0x00800000, 0x00800000, 0x00000000, 0x00000000, 0x00270000, 0x00730000,
        0x000001c0, 0x00000000, 0x00000000, 0x00000000, 0x00400000, 0x001c0000,
        0x00040011, 0x7c00001e, 0x00007c00, 0x00000000, 0x1fff0000, 0x0000f862,
        0x3f2ffc84, 0xf1fbb310, 0x00000bff, 0x00000000, 0xffff0000, 0xf0c37eff,
        0x2fffffff, 0xfff00030, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0x00000f00, 0x00000003, 0x00000000, 0x10000000, 0xf8000000, 0x00bfffff,
        0xf0010000, 0x00000007, 0x00000000, 0xf0ffc003, 0x000f8cc3, 0xff001f94,
        0x00000060, 0x00000000, 0x00000005, 0x0000e00f, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x00000000, 0xffff0000, 0x00001f9f, 0x00000000,
        0x00000000, 0x00000200, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x0000017e, 0x70000800, 0x50000000, 0x50000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00001e04, 0xffffffff, 0xffffffff,
        0xffdfffff, 0xffffffff, 0xdfffffff, 0xebffde64, 0xffffffef, 0xffffffff,
        0xdfdfe7bf, 0x7bffffff, 0xfffdfc5f, 0xffffffff, 0xffffffff, 0xffffff3f,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffcfff, 0xffffffff,
        0xffffffef, 0x0af7fe96, 0xaa96ea84, 0x5ef7f796, 0x0ffffbff, 0x0ffffbee,
        0x00000000, 0x00030000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_HEX_DIGIT: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0xffff,
    ],
    level3: &[
        0x00000000, 0x03ff0000, 0x0000007e, 0x0000007e, 0x03ff0000, 0x0000007e,
        0x0000007e, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_ASCII_HEX_DIGIT: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x03ff0000, 0x0000007e, 0x0000007e, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_IDEOGRAPHIC: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0002,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0x0001, 0x0003, 0x0004, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0x0005, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0006, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0007, 0x0008, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0009, 0x0001, 0x0001, 0x000a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x000b, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x000c, 0x0001,
        0x000d, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x000e, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x000f, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0010, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0011, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x000000c0, 0x070003fe, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff3fff, 0xffffffff, 0xffffffff,
        0x03ffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000010,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00ffffff, 0xffffffff, 0xffffffff,
        0x003fffff, 0x00000000, 0x000001ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xffff0000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x0fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000000,
        0xffffffff, 0x01ffffff, 0xffffffff, 0xffffffff, 0x3fffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff0003, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00000001, 0x3fffffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x000007ff, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_UNIFIED_IDEOGRAPH: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0x0001, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0001,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0003, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0004, 0x0000, 0x0005, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0006, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0007,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0008, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0x00000000, 0x00000000, 0x801ac000, 0x0000039a, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00000000, 0xffffffff, 0x01ffffff,
        0xffffffff, 0xffffffff, 0x3fffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffff0003, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00000001, 0xffffffff, 0xffffffff, 0x000007ff, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_RADICAL: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0x0001, 0x0002,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0xfbffffff, 0xffffffff, 0xffffffff, 0x000fffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x003fffff, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_IDS_BINARY_OPERATOR: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x0ff30000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_IDS_TRINARY_OPERATOR: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x000c0000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_DASH: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0x0005, 0xffff, 0xffff, 0x0006, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0007, 0xffff, 0xffff, 0xffff,
        0x0008, 0x0009, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x000a, 0xffff, 0x000b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00002000, 0x00000000, 0x00000000, 0x00000400, 0x40000000,
        0x00000000, 0x00000000, 0x00000001, 0x00000000, 0x00000000, 0x00000000,
        0x00000040, 0x00000000, 0x00000000, 0x00000000, 0x003f0000, 0x00000000,
        0x00080000, 0x08000000, 0x00000800, 0x00000000, 0x00000000, 0x00000000,
        0x00040000, 0x00000000, 0x00000000, 0x00000000, 0x04800000, 0x0c000000,
        0x20000001, 0x00000000, 0x10000000, 0x00010000, 0x00000000, 0x00000000,
        0x00000000, 0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00060000,
        0x01000000, 0x00000008, 0x00002000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_HYPHEN: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0005, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0006, 0xffff, 0x0007, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00002000, 0x00000000, 0x00000000, 0x00000400, 0x00000000,
        0x00000000, 0x00000000, 0x00000040, 0x00000000, 0x00000000, 0x00000000,
        0x00030000, 0x00000000, 0x00000000, 0x00000000, 0x00800000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x08000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000008, 0x00002000, 0x00000000,
        0x00000000, 0x00000020, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_QUOTATION_MARK: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff,
        0x0004, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0005, 0xffff, 0x0006, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000084, 0x00000000, 0x00000000, 0x00000000, 0x08000800,
        0x00000000, 0x00000000, 0xff000000, 0x06000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000004, 0x00000000, 0xe000f000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000001e, 0x00000000,
        0x00000084, 0x00000000, 0x00000000, 0x0000000c, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_TERMINAL_PUNCTUATION: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0x0002, 0xffff, 0xffff, 0xffff, 0x0003,
        0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0xffff, 0x0009, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x000a, 0xffff, 0x000b, 0xffff, 0x000c, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x000d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000e, 0x000f, 0x0010, 0x0011,
        0x0012, 0xffff, 0x0013, 0xffff, 0xffff, 0x0014, 0x0015, 0xffff, 0x0016, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0017, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0018, 0xffff, 0xffff, 0xffff,
        0x0019, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001a, 0xffff, 0xffff, 0x001b, 0x001c, 0xffff, 0xffff,
        0x001d, 0x001e, 0x001f, 0x0020, 0x0021, 0x0022, 0xffff, 0x0023, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0024, 0xffff, 0x0025, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0026, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0027, 0xffff, 0x0028, 0xffff, 0x0029, 0x002a, 0x002b, 0x002c, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0xffff, 0xffff,
        0x0035, 0xffff, 0xffff, 0x0036, 0x0037, 0xffff, 0x0038, 0xffff, 0xffff, 0xffff, 0x0039, 0xffff,
        0x003a, 0x003b, 0xffff, 0xffff, 0x003c, 0xffff, 0xffff, 0xffff, 0xffff, 0x003d, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x003e, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x003f, 0x0040, 0x0041, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0042, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0x0028, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0043, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x8c005002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x40000000, 0x00000080, 0x00000000, 0x00000000, 0x00000000,
        0x00000200, 0x00000000, 0x00000008, 0x00000000, 0xe8001000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00100000, 0x00000000,
        0x000017ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x03000000, 0x00000000, 0x7fff0000, 0x40000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000030, 0x00000000, 0x00000000,
        0x0c000000, 0x00000000, 0x0007e100, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000c00, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x000001fe, 0x00000000, 0x00000000, 0x00000000, 0x00004000,
        0x00000000, 0x00000000, 0x00000000, 0x00003800, 0x00000000, 0x00600000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x04700000, 0x00000000,
        0x0000033c, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000030, 0x00000000, 0x00000000, 0x00000f00, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xec000000, 0x60000000, 0x00000000, 0xf8000000,
        0x00000000, 0xc0000000, 0x00000000, 0x30000000, 0x00000380, 0x00000000,
        0x00000000, 0x10004000, 0x0018d002, 0x00000000, 0x00000006, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xc0000000,
        0x0000e000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00f80000, 0x00000000, 0x00000000, 0x00000000, 0x00c00000,
        0x00000000, 0x00000000, 0x0000c000, 0x00000000, 0x00000000, 0x00008000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000380, 0x00000000,
        0x00000000, 0x00000000, 0xe0000000, 0x00000000, 0x00000000, 0x00000000,
        0x80000000, 0x00030000, 0x00000000, 0x00000000, 0x00000000, 0x00000800,
        0x00000000, 0x00000000, 0x00f70000, 0x00000000, 0x8c005002, 0x00000000,
        0x00000000, 0x00000012, 0x80000000, 0x00000000, 0x00010000, 0x00000000,
        0x00000000, 0x00000000, 0x00800000, 0x00000000, 0x80000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00c00000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x003f0000, 0x00000000, 0xfc000000,
        0x00000000, 0x00000000, 0x1e000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x03e00000, 0x00000000, 0x000003c0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00003f80, 0x00000000,
        0x00000000, 0xc0000000, 0x00000003, 0x00000000, 0x00000000, 0x00000000,
        0x0000000e, 0x00000000, 0x00000000, 0x00000000, 0xc0002060, 0x00000000,
        0x00000000, 0x1f000000, 0x00000000, 0x00000000, 0x00000000, 0x00000200,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0c003800, 0x00000000,
        0x00000000, 0x00000000, 0x00fffe3c, 0x00000000, 0x00000000, 0x00000000,
        0x00000006, 0x00000000, 0x00000000, 0x70000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000050, 0x00000000, 0x00000000, 0x00000000,
        0x0000000c, 0x00000000, 0x18000000, 0x00000006, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x0000000e, 0x00020000, 0x00000000, 0x00000000,
        0x00000000, 0x01800000, 0x00000000, 0x00000000, 0x00000000, 0x001f0000,
        0x00000000, 0x00000000, 0x00000000, 0x0000c000, 0x00000000, 0x00000000,
        0x00000000, 0x00200000, 0x00000000, 0x03800000, 0x00000010, 0x00000000,
        0x01800000, 0x00000000, 0x00000000, 0x00000000, 0x00000780, 0x00000000,
        0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_SENTENCE_TERMINAL: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001,
        0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0xffff, 0x0007, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0008, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0009, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000a, 0xffff, 0x000b, 0xffff,
        0x000c, 0xffff, 0x000d, 0xffff, 0xffff, 0x000e, 0x000f, 0xffff, 0x0010, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0011, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0012, 0xffff, 0xffff, 0xffff,
        0x0013, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0014, 0xffff, 0xffff, 0x0015, 0x0016, 0xffff, 0xffff,
        0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0xffff, 0x001d, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x001e, 0xffff, 0x001f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0020, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027, 0x0028, 0xffff, 0xffff,
        0x0029, 0xffff, 0xffff, 0x002a, 0x002b, 0xffff, 0x002c, 0xffff, 0xffff, 0xffff, 0x002d, 0xffff,
        0x002e, 0x002f, 0xffff, 0xffff, 0x002b, 0xffff, 0xffff, 0xffff, 0xffff, 0x0030, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0031, 0x0032, 0x0033, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0034, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0x0035, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0036, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x80004002, 0x00000000, 0x00000000, 0x00000200, 0x00000000,
        0x00000000, 0x00000000, 0xe0000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00100000, 0x00000000, 0x00000007, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x02000000,
        0x00000000, 0x62800000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000030, 0x00000000, 0x00000000, 0x00000c00, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000184, 0x00000000, 0x00000000,
        0x00000000, 0x00004000, 0x00000000, 0x00600000, 0x00000000, 0x00000000,
        0x00000208, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000030, 0x00000000, 0x00000000, 0x00000f00, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xcc000000, 0x60000000, 0x00000000, 0x18000000,
        0x00000000, 0xc0000000, 0x00000000, 0x30000000, 0x00000380, 0x00000000,
        0x00000000, 0x10004000, 0x00180000, 0x00000000, 0x00000004, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,
        0x0000c000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00880000, 0x00000000, 0x00000000, 0x00000000, 0x00c00000,
        0x00000000, 0x00000000, 0x0000c000, 0x00000000, 0x00000000, 0x00008000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000300, 0x00000000,
        0x00000000, 0x00000000, 0xe0000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00030000, 0x00000000, 0x00000000, 0x00000000, 0x00000800,
        0x00000000, 0x00000000, 0x00c40000, 0x00000000, 0x80004002, 0x00000000,
        0x00000000, 0x00000002, 0x00000000, 0x00000000, 0x00c00000, 0x00000000,
        0x00000000, 0x00000000, 0x03e00000, 0x00000000, 0x000003c0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000180, 0x00000000,
        0x00000000, 0xc0000000, 0x00000003, 0x00000000, 0x00000000, 0x00000000,
        0x0000000e, 0x00000000, 0x00000000, 0x00000000, 0xc0002060, 0x00000000,
        0x00000000, 0x1b000000, 0x00000000, 0x00000000, 0x00000000, 0x00000200,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00001800, 0x00000000,
        0x00000000, 0x00000000, 0x00fffe0c, 0x00000000, 0x00000000, 0x00000000,
        0x00000006, 0x00000000, 0x00000000, 0x70000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000050, 0x00000000, 0x00000000, 0x00000000,
        0x0000000c, 0x00000000, 0x18000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x01800000, 0x00000000, 0x00000000,
        0x00000000, 0x0000c000, 0x00000000, 0x00000000, 0x00000000, 0x00200000,
        0x00000000, 0x01800000, 0x00000010, 0x00000000, 0x01000000, 0x00000000,
        0x00000000, 0x00000000, 0x80000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000100, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_DIACRITIC: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0x0002, 0x0003, 0x0004, 0xffff, 0x0005, 0x0006, 0x0007,
        0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x000f, 0x0010, 0x0011, 0x0012,
        0x000f, 0x000f, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0xffff, 0xffff,
        0xffff, 0xffff, 0x001b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001c, 0x001d,
        0xffff, 0xffff, 0x001e, 0xffff, 0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026,
        0xffff, 0xffff, 0xffff, 0x0027, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0028, 0xffff, 0xffff, 0x0029, 0xffff, 0xffff, 0xffff,
        0x002a, 0x002b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002c, 0x002d, 0x002e, 0x002f,
        0xffff, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0037, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0038, 0xffff, 0x0039, 0x003a, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x003b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x003c,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x003d, 0xffff, 0xffff, 0xffff, 0xffff, 0x003e, 0xffff,
        0xffff, 0xffff, 0x003f, 0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0xffff,
        0x0048, 0x0049, 0xffff, 0x004a, 0x004b, 0x004c, 0x004d, 0xffff, 0x0042, 0xffff, 0x004e, 0x003b,
        0x004f, 0x0050, 0xffff, 0xffff, 0x004b, 0xffff, 0x0051, 0x0052, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0053, 0x0054, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0055, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0056,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0057, 0xffff, 0xffff, 0xffff, 0x0058, 0x0059, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0054, 0xffff, 0xffff, 0x005a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x005b, 0x005c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x40000000, 0x00000001, 0x00000000, 0x01908100,
        0x00000000, 0x00000000, 0x00000000, 0xffff0000, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xe0ff7fff, 0x04300007, 0x00000030, 0x00000000,
        0x00000000, 0x00000000, 0x000000f8, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x02000000, 0x00000000, 0xfffe0000, 0xbffffffb,
        0x00000016, 0x00000000, 0x00000000, 0x00000000, 0x0187f800, 0x00000000,
        0x00000000, 0x00000000, 0x80000000, 0x00001c61, 0x00000000, 0xffff0000,
        0x000007ff, 0x00000000, 0x00000000, 0x0001ffc0, 0x00000000, 0x003ff800,
        0x03000000, 0x00000000, 0x00000000, 0x00000000, 0xff000000, 0x00000000,
        0x0007fe00, 0x7ffffff8, 0x00000000, 0x10000000, 0x001e2000, 0x00020000,
        0x00000000, 0x10000000, 0x00002000, 0x00000000, 0x00000000, 0x10000000,
        0x00002000, 0xe0000000, 0x00000000, 0x10000000, 0x00202000, 0x00000000,
        0x00000000, 0x00000000, 0x00002000, 0x00000000, 0x00000000, 0x18000000,
        0x00002000, 0x00000000, 0x00000000, 0x00000000, 0x00000400, 0x00000000,
        0x00000000, 0x00000000, 0x00005f80, 0x00000000, 0x00000000, 0x04000000,
        0x00001f00, 0x00000000, 0x03000000, 0xc2a00000, 0x00000000, 0x00000000,
        0x000000dc, 0x00000000, 0x00000040, 0x00000000, 0x00000000, 0x06800000,
        0x00000000, 0x00003e18, 0x0c00bf80, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xe0000000, 0x00000000, 0x00300000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x200ffe00, 0x00000000,
        0x00000000, 0x0e000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x9fe00000, 0x00000000, 0x7fff0000, 0x00000ffe, 0x00000000,
        0x00000000, 0x00100000, 0x00000010, 0x000ff800, 0x00000000, 0x00000c00,
        0x00000000, 0x00000000, 0x00000000, 0x00c00000, 0x00000000, 0x3f000000,
        0x00000000, 0x00000000, 0xffff0000, 0x039021ff, 0x00000000, 0xfffff000,
        0xffffffff, 0x000007ff, 0x00000000, 0x00000000, 0x0000fff0, 0xffe00000,
        0x00000000, 0xa0000000, 0xe000e003, 0x6000e000, 0x00000000, 0x00000000,
        0x00000000, 0x00038000, 0x00000000, 0x00008000, 0x00000000, 0x00000000,
        0x00000000, 0x0000fc00, 0x00000000, 0x00000000, 0x1e000000, 0x00000000,
        0x00000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0xb0008000,
        0x30000000, 0x00000000, 0x00000000, 0x00030000, 0xffffffff, 0x00000003,
        0x00000000, 0x00000000, 0x00000700, 0x00000000, 0x00000000, 0x03000000,
        0x00000000, 0x00000000, 0x00000010, 0x0003ffff, 0x00000000, 0x00007800,
        0x00080000, 0x00000000, 0x00000000, 0x00080000, 0x00000001, 0x00000020,
        0x00000000, 0x00000000, 0x00000000, 0x38000000, 0x00000000, 0x80000000,
        0x00000007, 0x00400000, 0x00000000, 0x00000000, 0xf8000000, 0x00000e00,
        0x00000000, 0x00000000, 0x00000000, 0x00003000, 0x40000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0000ffff, 0x00000000, 0x00000000,
        0x00000000, 0x40000000, 0x00000001, 0x00010000, 0xc0000000, 0x00000000,
        0x00000000, 0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000001,
        0xffffffbf, 0x07fdffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000060, 0x00000000, 0x000000fc, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x0001ffc0, 0x00000000, 0x0000003c, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000040, 0x00010000,
        0x00000000, 0x06000000, 0x00000000, 0x00000000, 0x00000000, 0x00180000,
        0x00000000, 0x00080000, 0x00000000, 0x00000000, 0x00001c01, 0x00000000,
        0x00000000, 0x00600000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000600, 0x00000000, 0x10000000, 0x00002000, 0x001f1fc0,
        0x00000000, 0x00000000, 0x00000044, 0x00000000, 0x00000000, 0x00000000,
        0x0000000c, 0x00000000, 0x00000000, 0x80000000, 0x00000001, 0x00000000,
        0x00000000, 0x80000000, 0x00000000, 0x00000000, 0x00000000, 0x00c00000,
        0x00000000, 0x00000000, 0x00000000, 0x00000800, 0x00000000, 0x00000000,
        0x00000000, 0x60000000, 0x00000008, 0x00000000, 0x00000000, 0x00100000,
        0x00000080, 0x00000000, 0x02000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000034, 0x00000000, 0x00800000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x001f0000,
        0x00000000, 0x007f0000, 0x00000000, 0x00000000, 0xffff8000, 0x00000000,
        0x00000000, 0x00030000, 0x00000000, 0x00000000, 0x00000000, 0x6fef0000,
        0xffffffff, 0xffff3fff, 0x0000007f, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xf807e380, 0x00000fe7, 0x00003c00, 0x00000000, 0x00000000,
        0x00000000, 0x00004000, 0x00000000, 0x0000f000, 0x00000000, 0x00000000,
        0x007f0000, 0x00000000, 0x00000000, 0x00000000, 0x00000770, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_EXTENDER: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0005, 0x0005, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0006, 0xffff, 0xffff, 0xffff, 0xffff, 0x0007, 0xffff, 0xffff, 0x0008, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0009, 0x000a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000b, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x000d, 0x000e, 0x000f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0010,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0011, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0012, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0013, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0014, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0015, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0x0016, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0017, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00800000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00030000, 0x00000000, 0x00000000, 0x00000000, 0x00000001, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x04000000, 0x00000000, 0x00000000,
        0x00200000, 0x00000000, 0x00000000, 0x00000000, 0x00000040, 0x00000000,
        0x00000400, 0x00000000, 0x00000008, 0x00000000, 0x00000000, 0x00000080,
        0x00000000, 0x00000000, 0x00000000, 0x00400000, 0x00000000, 0x08000000,
        0x00000020, 0x003e0000, 0x00000000, 0x00000000, 0x60000000, 0x00000000,
        0x00000000, 0x70000000, 0x00200000, 0x00000000, 0x00000000, 0x00000000,
        0x00001000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00008000, 0x00000040, 0x00000000, 0x00000000, 0x00000000, 0x00010000,
        0x00000000, 0x00000000, 0x20000000, 0x00180000, 0x00000006, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x20000000, 0x00000000,
        0x00000000, 0x00000000, 0x000001c0, 0x00000000, 0x01000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000000c, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x0000000b, 0x00000000, 0x30000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000070, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_DEFAULT_IGNORABLE_CODE_POINT: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0002, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0003, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0004,
        0x0005, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0006, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0007, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0008, 0x0009, 0xffff, 0x000a, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0x000b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d,
        0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d,
        0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d, 0x000d,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00002000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00008000, 0x00000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x80000000, 0x00000001, 0x00000000, 0x00300000,
        0x00000000, 0x00000000, 0x0000f800, 0x00000000, 0x00000000, 0x00000000,
        0x0000f800, 0x00007c00, 0x00000000, 0x0000ffff, 0x00000000, 0x00000000,
        0x00000000, 0x00000010, 0x0000ffff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x80000000, 0x00000000, 0x00000001,
        0x00000000, 0x01ff0000, 0x00000000, 0x0000000f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x07f80000, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_BIDI_CONTROL: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x0000c000, 0x00007c00,
        0x00000000, 0x000003c0, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_BIDI_MIRRORED: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0x0005, 0x0006, 0xffff, 0x0007, 0x0008, 0x0009, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000a, 0x000b, 0xffff, 0xffff, 0xffff, 0x000c,
        0x000d, 0x000e, 0xffff, 0x000f, 0xffff, 0xffff, 0xffff, 0xffff, 0x0010, 0xffff, 0xffff, 0xffff,
        0x0011, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0012, 0xffff, 0x0013, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0014, 0x0015, 0x0016, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x50000300, 0x28000000, 0x28000000, 0x00000000, 0x08000800,
        0x00000000, 0x00000000, 0x00000000, 0x3c000000, 0x00000000, 0x00000000,
        0x18000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x06000000,
        0x00000060, 0x60000000, 0x00006000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000001, 0x00000000, 0xbc623f1e, 0xfa0ff857,
        0x803c1fff, 0xffffcff5, 0x01079fff, 0xc1ffffcc, 0xffc33e00, 0xffff3fff,
        0x00000f00, 0x00000603, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x003fff00, 0x00000000, 0x00000000, 0x70783b79, 0x0000fffc,
        0xf9fffff8, 0x0100fffd, 0x1f37c23f, 0x33f0033a, 0xdffffc00, 0x70307a53,
        0x01800000, 0xfe19bc30, 0xffffffff, 0xffffbfcf, 0x507fffff, 0x2f88707c,
        0x00000000, 0x00000000, 0x00000000, 0x40000000, 0x3000363c, 0x000003ff,
        0x1fe00000, 0x00000000, 0x0ff3ff00, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x7e000000, 0x00000030, 0x50000300, 0x28000000,
        0xa8000000, 0x0000000d, 0x00000000, 0x00000000, 0x08000000, 0x00000000,
        0x00200000, 0x00000000, 0x00008000, 0x00000000, 0x00000200, 0x00000000,
        0x00000008, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_JOIN_CONTROL: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00003000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_SOFT_DOTTED: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0xffff, 0x0001, 0xffff, 0x0002, 0x0003, 0xffff, 0x0004, 0x0005, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0006, 0x0007,
        0x0008, 0x0009, 0xffff, 0xffff, 0x000a, 0xffff, 0x000b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0013, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x00000600, 0x00000000, 0x00008000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000200, 0x00000100,
        0x20000000, 0x00040000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00080000, 0x00000000, 0x00000000, 0x01400000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000004, 0x00400000, 0x00000110,
        0x00000000, 0x00000000, 0x00000000, 0x00002000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000800, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00020000, 0x00000000, 0x00000000, 0x00000300, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x10000000, 0x00000000, 0x0000000c,
        0x00c00000, 0x00000000, 0x00000c00, 0xc0000000, 0x00000000, 0x000c0000,
        0x00000000, 0x000000c0, 0x0c000000, 0x00000000, 0x0000c000, 0x00000000,
        0x0000000c, 0x00c00000, 0x00000000, 0x00000c00, 0xc0000000, 0x00000000,
        0x000c0000, 0x00000000, 0x00000000, 0x00000000, 0x04000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_VARIATION_SELECTOR: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0001, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0003,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x0000b800, 0x00000000, 0x00000000, 0x00000000, 0x0000ffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x0000ffff, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_NONCHARACTER_CODE_POINT: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
        0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
    ],
    level2: &[
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0001,
    ],
    level3: &[
        0x00000000, 0x00000000, 0xffff0000, 0x0000ffff, 0x00000000, 0x00000000,
        0x00000000, 0xc0000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_ID_START: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0005, 0x0002, 0x0006, 0x0007, 0x0008,
        0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014,
        0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x0002, 0x0002,
        0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x0002, 0x0002, 0x0002, 0x0024, 0x0025, 0x0026, 0x0027,
        0x0028, 0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0002, 0x0032,
        0x0002, 0x0002, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0039, 0x003a, 0x003b, 0xffff, 0xffff, 0xffff, 0xffff,
        0x003c, 0x003d, 0x003e, 0x003f, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0032,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0040, 0x0002, 0x0002, 0x0041, 0x0042, 0x0043, 0x0044,
        0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004a, 0x004b, 0x004c, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x004d,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x004e, 0x004f, 0x0050, 0x0051,
        0x0002, 0x0002, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005a, 0xffff,
        0xffff, 0x005b, 0x005c, 0x005d, 0x0002, 0x005e, 0x005f, 0x0060, 0x0002, 0x0002, 0x0061, 0x0062,
        0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0xffff,
        0xffff, 0x006e, 0x006f, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0xffff,
        0x0078, 0x0079, 0xffff, 0x007a, 0x007b, 0x007c, 0x007d, 0xffff, 0x007e, 0x007f, 0x0080, 0x0081,
        0x0082, 0x0083, 0xffff, 0xffff, 0x0084, 0x0085, 0x0086, 0x0087, 0xffff, 0x0088, 0xffff, 0x0089,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x008a, 0x008b, 0x0002, 0x008c, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x008d, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x008e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x008f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0090, 0x0091, 0x0092, 0x0085, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0093, 0xffff, 0x0094, 0x0095, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0096, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0097, 0x0038, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0098,
        0x0002, 0x0002, 0x0099, 0x0002, 0x0002, 0x009a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x009b, 0x009c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x009d, 0x009e, 0x009f, 0x0002, 0x0002, 0x00a0, 0x00a1, 0x00a2, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00a3, 0xffff,
        0xffff, 0xffff, 0x00a4, 0xffff, 0xffff, 0x00a5, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00a6, 0x0002, 0x00a7, 0x00a8, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x00a9, 0x00aa, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x00ab, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00ac, 0x0002,
        0x00ad, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00ae, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00af, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00b0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x00b1, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x07fffffe, 0x07fffffe, 0x00000000, 0x04200400,
        0xff7fffff, 0xff7fffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x0003ffc3, 0x0000501f, 0x00000000, 0x00000000,
        0x00000000, 0xbcdf0000, 0xffffd740, 0xfffffffb, 0xffffffff, 0xffbfffff,
        0xfffffc03, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffff,
        0x027fffff, 0xffffffff, 0x000001ff, 0x00000000, 0xffff0000, 0x000787ff,
        0x00000000, 0xffffffff, 0x000007ff, 0xfffec000, 0xffffffff, 0xffffffff,
        0x002fffff, 0x9c00c060, 0xfffd0000, 0x0000ffff, 0xffffe000, 0xffffffff,
        0xffffffff, 0x0002003f, 0xfffffc00, 0x043007ff, 0x043fffff, 0x00000110,
        0x01ffffff, 0xffff07ff, 0x00007eff, 0xffffffff, 0x000003ff, 0x00000000,
        0xfffffff0, 0x23ffffff, 0xff010000, 0xfffe0003, 0xfff99fe1, 0x23c5fdff,
        0xb0004000, 0x10030003, 0xfff987e0, 0x036dfdff, 0x5e000000, 0x001c0000,
        0xfffbbfe0, 0x23edfdff, 0x00010000, 0x02000003, 0xfff99fe0, 0x23edfdff,
        0xb0000000, 0x00020003, 0xd63dc7e8, 0x03ffc718, 0x00010000, 0x00000000,
        0xfffddfe0, 0x23fffdff, 0x27000000, 0x00000003, 0xfffddfe1, 0x23effdff,
        0x60000000, 0x00060003, 0xfffddff0, 0x27ffffff, 0x80704000, 0xfc000003,
        0xfc7fffe0, 0x2ffbffff, 0x0000007f, 0x00000000, 0xfffffffe, 0x000dffff,
        0x0000007f, 0x00000000, 0xfffff7d6, 0x200dffaf, 0xf000005f, 0x00000000,
        0x00000001, 0x00000000, 0xfffffeff, 0x00001fff, 0x00001f00, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0x800007ff, 0x3c3f0000, 0xffe1c062,
        0x00004003, 0xffffffff, 0xffff20bf, 0xf7ffffff, 0xffffffff, 0xffffffff,
        0x3d7f3dff, 0xffffffff, 0xffff3dff, 0x7f3dffff, 0xff7fff3d, 0xffffffff,
        0xff3dffff, 0xffffffff, 0x07ffffff, 0x00000000, 0x0000ffff, 0xffffffff,
        0xffffffff, 0x3f3fffff, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff9fff, 0x07fffffe, 0xffffffff,
        0xffffffff, 0x01ffc7ff, 0x8003ffff, 0x0003ffff, 0x0003ffff, 0x0001dfff,
        0xffffffff, 0x000fffff, 0x10800000, 0x00000000, 0x00000000, 0xffffffff,
        0xffffffff, 0x01ffffff, 0xffffffff, 0xffff05ff, 0xffffffff, 0x003fffff,
        0x7fffffff, 0x00000000, 0xffff0000, 0x001f3fff, 0xffffffff, 0xffff0fff,
        0x000003ff, 0x00000000, 0x007fffff, 0xffffffff, 0x001fffff, 0x00000000,
        0x00000000, 0x00000080, 0x00000000, 0x00000000, 0xffffffe0, 0x000fffff,
        0x00001fe0, 0x00000000, 0xfffffff8, 0xfc00c001, 0xffffffff, 0x0000003f,
        0xffffffff, 0x0000000f, 0xfc00e000, 0x3fffffff, 0xffff01ff, 0xe7ffffff,
        0x00000000, 0x046fde00, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000,
        0x3f3fffff, 0xffffffff, 0xaaff3f3f, 0x3fffffff, 0xffffffff, 0x5fdfffff,
        0x0fcf1fdc, 0x1fdc1fff, 0x00000000, 0x00000000, 0x00000000, 0x80020000,
        0x1fff0000, 0x00000000, 0x00000000, 0x00000000, 0x3f2ffc84, 0xf3fffd50,
        0x000043e0, 0xffffffff, 0x000001ff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x000c781f, 0xffffffff, 0xffff20bf,
        0xffffffff, 0x000080ff, 0x007fffff, 0x7f7f7f7f, 0x7f7f7f7f, 0x00000000,
        0x000000e0, 0x1f3e03fe, 0xfffffffe, 0xffffffff, 0xf87fffff, 0xfffffffe,
        0xffffffff, 0xf7ffffff, 0xffffffe0, 0xfffeffff, 0xffffffff, 0xffffffff,
        0x00007fff, 0xffffffff, 0x00000000, 0xffff0000, 0x00001fff, 0x00000000,
        0xffff0000, 0x3fffffff, 0xffff1fff, 0x00000c00, 0xffffffff, 0x80007fff,
        0x3fffffff, 0xffffffff, 0xffffffff, 0x0000ffff, 0xff800000, 0xfffffffc,
        0xffffffff, 0xffffffff, 0xfffff9ff, 0xffffffff, 0x03eb07ff, 0xfffc0000,
        0xfffff7bb, 0x00000007, 0xffffffff, 0x000fffff, 0xfffffffc, 0x000fffff,
        0x00000000, 0x68fc0000, 0xfffffc00, 0xffff003f, 0x0000007f, 0x1fffffff,
        0xfffffff0, 0x0007ffff, 0x00008000, 0x7c00ffdf, 0xffffffff, 0x000001ff,
        0x00000ff7, 0xc47fffff, 0xffffffff, 0x3e62ffff, 0x38000005, 0x001c07ff,
        0x007e7e7e, 0xffff7f7f, 0xf7ffffff, 0xffff03ff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00000007, 0xffffffff, 0xffff000f, 0xfffff87f, 0x0fffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff3fff, 0xffffffff, 0xffffffff,
        0x03ffffff, 0x00000000, 0xa0f8007f, 0x5f7ffdff, 0xffffffdb, 0xffffffff,
        0xffffffff, 0x0003ffff, 0xfff80000, 0xffffffff, 0xffffffff, 0x3fffffff,
        0xffff0000, 0xffffffff, 0xfffcffff, 0xffffffff, 0x000000ff, 0x0fff0000,
        0x00000000, 0x00000000, 0x00000000, 0xffdf0000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x1fffffff, 0x00000000, 0x07fffffe, 0x07fffffe, 0xffffffc0,
        0xffffffff, 0x7fffffff, 0x1cfcfcfc, 0x00000000, 0xffffefff, 0xb7ffff7f,
        0x3fff3fff, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0x07ffffff,
        0x00000000, 0x00000000, 0xffffffff, 0x001fffff, 0x1fffffff, 0xffffffff,
        0x0001ffff, 0x00000000, 0xffffffff, 0xffffe000, 0xffff07ff, 0x003fffff,
        0x3fffffff, 0xffffffff, 0x003eff0f, 0x00000000, 0x3fffffff, 0xffff0000,
        0xff0fffff, 0x0fffffff, 0xffffffff, 0xffff00ff, 0xffffffff, 0xf7ff000f,
        0xffb7f7ff, 0x1bfbfffb, 0x00000000, 0x00000000, 0xffffffff, 0x007fffff,
        0x003fffff, 0x000000ff, 0xffffffbf, 0x07fdffff, 0x00000000, 0x00000000,
        0xfffffd3f, 0x91bfffff, 0x003fffff, 0x007fffff, 0x7fffffff, 0x00000000,
        0x00000000, 0x0037ffff, 0x003fffff, 0x03ffffff, 0x00000000, 0x00000000,
        0xffffffff, 0xc0ffffff, 0x00000000, 0x00000000, 0xfeef0001, 0x003fffff,
        0x00000000, 0x1fffffff, 0x1fffffff, 0x00000000, 0xfffffeff, 0x0000001f,
        0xffffffff, 0x003fffff, 0x003fffff, 0x0007ffff, 0x0003ffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x000001ff, 0x00000000,
        0xffffffff, 0x0007ffff, 0xffffffff, 0x0007ffff, 0xffffffff, 0x0000000f,
        0x00000000, 0x00000000, 0xffffffff, 0x000303ff, 0x00000000, 0x00000000,
        0x1fffffff, 0xffff0080, 0x0000003f, 0xffff0000, 0x00000003, 0xffff0000,
        0x0000001f, 0x007fffff, 0xfffffff8, 0x00ffffff, 0x00000000, 0x00260000,
        0xfffffff8, 0x0000ffff, 0xffff0000, 0x000001ff, 0xfffffff8, 0x0000007f,
        0xffff0090, 0x0047ffff, 0xfffffff8, 0x0007ffff, 0x1400001e, 0x00000000,
        0xfffbffff, 0x00000fff, 0x00000000, 0x00000000, 0xbfffbd7f, 0xffff01ff,
        0x7fffffff, 0x00000000, 0xfff99fe0, 0x23edfdff, 0xe0010000, 0x00000003,
        0xffffffff, 0x001fffff, 0x80000780, 0x00000003, 0xffffffff, 0x0000ffff,
        0x000000b0, 0x00000000, 0xffffffff, 0x00007fff, 0x0f000000, 0x00000000,
        0xffffffff, 0x0000ffff, 0x00000010, 0x00000000, 0xffffffff, 0x010007ff,
        0x00000000, 0x00000000, 0x07ffffff, 0x00000000, 0x0000007f, 0x00000000,
        0xffffffff, 0x00000fff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff,
        0xffffffff, 0x80000000, 0xff6ff27f, 0x8000ffff, 0x00000002, 0x00000000,
        0x00000000, 0xfffffcff, 0x0001ffff, 0x0000000a, 0xfffff801, 0x0407ffff,
        0xf0010000, 0xffffffff, 0x200003ff, 0xffff0000, 0xffffffff, 0x01ffffff,
        0xfffffdff, 0x00007fff, 0x00000001, 0xfffc0000, 0x0000ffff, 0x00000000,
        0x00000000, 0x00000000, 0xfffffb7f, 0x0001ffff, 0x00000040, 0xfffffdbf,
        0x010003ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x0007ffff, 0x00000000, 0x00010000, 0x00000000, 0x00000000,
        0x03ffffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00007fff, 0xffffffff, 0xffffffff, 0x0000000f, 0x00000000,
        0xffff0000, 0xffffffff, 0xffffffff, 0x0001ffff, 0xffffffff, 0x00007fff,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x0000007f, 0x00000000,
        0xffffffff, 0x01ffffff, 0x7fffffff, 0xffff0000, 0xffffffff, 0x7fffffff,
        0xffff0000, 0x00003fff, 0xffffffff, 0x0000ffff, 0x0000000f, 0xe0fffff8,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0x000107ff, 0x00000000, 0xfff80000, 0x00000000, 0x00000000, 0x0000000b,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00ffffff, 0xffffffff, 0xffffffff,
        0x003fffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x6fef0000,
        0xffffffff, 0x00000007, 0x00070000, 0xffff00f0, 0xffffffff, 0xffffffff,
        0xffffffff, 0x0fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x1fff07ff,
        0x03ff01ff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffdfffff, 0xffffffff, 0xdfffffff, 0xebffde64, 0xffffffef, 0xffffffff,
        0xdfdfe7bf, 0x7bffffff, 0xfffdfc5f, 0xffffffff, 0xffffffff, 0xffffff3f,
        0xf7fffffd, 0xf7ffffff, 0xffdfffff, 0xffdfffff, 0xffff7fff, 0xffff7fff,
        0xfffffdff, 0xfffffdff, 0x00000ff7, 0x00000000, 0x7fffffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0x3f801fff, 0x00004000, 0x00000000,
        0xffff0000, 0x00003fff, 0xffffffff, 0x00000fff, 0x00000000, 0x00000000,
        0x00000000, 0x7fff6f7f, 0xffffffff, 0xffffffff, 0x0000001f, 0x00000000,
        0xffffffff, 0xffffffff, 0x0000080f, 0x00000000, 0xffffffef, 0x0af7fe96,
        0xaa96ea84, 0x5ef7f796, 0x0ffffbff, 0x0ffffbee, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00000000, 0xffffffff, 0x01ffffff,
        0xffffffff, 0xffffffff, 0x3fffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffff0003, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00000001, 0x3fffffff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x000007ff, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_ID_CONTINUE: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0004, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0005, 0x0002, 0x0006, 0x0007, 0x0008,
        0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014,
        0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x0002, 0x0002,
        0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x0002, 0x0002, 0x0002, 0x0024, 0x0025, 0x0026, 0x0027,
        0x0028, 0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0038, 0x0039, 0x003a, 0xffff, 0xffff, 0xffff, 0xffff,
        0x003b, 0x003c, 0x003d, 0x003e, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x003f,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0040, 0x0002, 0x0002, 0x0041, 0x0042, 0x0043, 0x0044,
        0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004a, 0x004b, 0x004c, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x004d,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x004e, 0x004f, 0x0050, 0x0051,
        0x0002, 0x0002, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005a, 0x005b,
        0xffff, 0x005c, 0x005d, 0x005e, 0x0002, 0x005f, 0x0060, 0x0061, 0x0002, 0x0002, 0x0062, 0x0063,
        0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0x006e, 0xffff,
        0xffff, 0x006f, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0xffff,
        0x0079, 0x007a, 0xffff, 0x007b, 0x007c, 0x007d, 0x007e, 0xffff, 0x007f, 0x0080, 0x0081, 0x0082,
        0x0083, 0x0084, 0xffff, 0xffff, 0x0085, 0x0086, 0x0087, 0x0088, 0xffff, 0x0089, 0xffff, 0x008a,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x008b, 0x008c, 0x0002, 0x008d, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x008e, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x008f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0090, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0091, 0x0092, 0x0093, 0x0094, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0095, 0xffff, 0x0096, 0x0097, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0098, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0099, 0x0037, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x009a,
        0x0002, 0x0002, 0x009b, 0x0002, 0x0002, 0x009c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x009d, 0x009e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x009f, 0xffff, 0xffff, 0xffff, 0x00a0, 0x00a1, 0x00a2, 0xffff, 0xffff, 0xffff,
        0x00a3, 0x00a4, 0x00a5, 0x0002, 0x0002, 0x00a6, 0x00a7, 0x00a8, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00a9, 0x00aa, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00ab, 0xffff,
        0x00ac, 0xffff, 0x00ad, 0xffff, 0xffff, 0x00ae, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00af, 0x0002, 0x00b0, 0x00b1, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x00b2, 0x00b3, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00b4, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x00b5, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b6, 0x0002,
        0x00b7, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b8, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b9, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00ba, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x00bb, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x00bc,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x03ff0000, 0x87fffffe, 0x07fffffe, 0x00000000, 0x04a00400,
        0xff7fffff, 0xff7fffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x0003ffc3, 0x0000501f, 0xffffffff, 0xffffffff,
        0xffffffff, 0xbcdfffff, 0xffffd7c0, 0xfffffffb, 0xffffffff, 0xffbfffff,
        0xfffffcfb, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffff,
        0x027fffff, 0xffffffff, 0xfffe01ff, 0xbfffffff, 0xffff00b6, 0x000787ff,
        0x07ff0000, 0xffffffff, 0xffffffff, 0xffffc3ff, 0xffffffff, 0xffffffff,
        0x9fefffff, 0x9ffffdff, 0xffff0000, 0xffffffff, 0xffffe7ff, 0xffffffff,
        0xffffffff, 0x0003ffff, 0xffffffff, 0x243fffff, 0xffffffff, 0x00003fff,
        0x0fffffff, 0xffff07ff, 0xff007eff, 0xffffffff, 0xffffffff, 0xfffffffb,
        0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffcf, 0xfff99fef, 0xf3c5fdff,
        0xb080799f, 0x5003ffcf, 0xfff987ee, 0xd36dfdff, 0x5e023987, 0x003fffc0,
        0xfffbbfee, 0xf3edfdff, 0x00013bbf, 0xfe00ffcf, 0xfff99fee, 0xf3edfdff,
        0xb0e0399f, 0x0002ffcf, 0xd63dc7ec, 0xc3ffc718, 0x00813dc7, 0x0000ffc0,
        0xfffddfff, 0xf3fffdff, 0x27603ddf, 0x0000ffcf, 0xfffddfef, 0xf3effdff,
        0x60603ddf, 0x0006ffcf, 0xfffddfff, 0xffffffff, 0x80f07ddf, 0xfc00ffcf,
        0xfc7fffee, 0x2ffbffff, 0xff5f847f, 0x000cffc0, 0xfffffffe, 0x07ffffff,
        0x03ff7fff, 0x00000000, 0xfffff7d6, 0x3fffffaf, 0xf3ff3f5f, 0x00000000,
        0x03000001, 0xc2a003ff, 0xfffffeff, 0xfffe1fff, 0xfeffffdf, 0x1fffffff,
        0x00000040, 0x00000000, 0xffffffff, 0xffffffff, 0xffff03ff, 0xffffffff,
        0x3fffffff, 0xffffffff, 0xffff20bf, 0xf7ffffff, 0xffffffff, 0xffffffff,
        0x3d7f3dff, 0xffffffff, 0xffff3dff, 0x7f3dffff, 0xff7fff3d, 0xffffffff,
        0xff3dffff, 0xffffffff, 0xe7ffffff, 0x0003fe00, 0x0000ffff, 0xffffffff,
        0xffffffff, 0x3f3fffff, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff9fff, 0x07fffffe, 0xffffffff,
        0xffffffff, 0x01ffc7ff, 0x803fffff, 0x001fffff, 0x000fffff, 0x000ddfff,
        0xffffffff, 0xffffffff, 0x308fffff, 0x000003ff, 0x03ffb800, 0xffffffff,
        0xffffffff, 0x01ffffff, 0xffffffff, 0xffff07ff, 0xffffffff, 0x003fffff,
        0x7fffffff, 0x0fff0fff, 0xffffffc0, 0x001f3fff, 0xffffffff, 0xffff0fff,
        0x07ff03ff, 0x00000000, 0x0fffffff, 0xffffffff, 0x7fffffff, 0x9fffffff,
        0x03ff03ff, 0xbfff0080, 0x00007fff, 0x00000000, 0xffffffff, 0xffffffff,
        0x03ff1fff, 0x000ff800, 0xffffffff, 0xffffffff, 0xffffffff, 0x000fffff,
        0xffffffff, 0x00ffffff, 0xffffe3ff, 0x3fffffff, 0xffff01ff, 0xe7ffffff,
        0xfff70000, 0x07ffffff, 0x3f3fffff, 0xffffffff, 0xaaff3f3f, 0x3fffffff,
        0xffffffff, 0x5fdfffff, 0x0fcf1fdc, 0x1fdc1fff, 0x00000000, 0x80000000,
        0x00100001, 0x80020000, 0x1fff0000, 0x00000000, 0x1fff0000, 0x0001ffe2,
        0x3f2ffc84, 0xf3fffd50, 0x000043e0, 0xffffffff, 0x000001ff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0x000ff81f,
        0xffffffff, 0xffff20bf, 0xffffffff, 0x800080ff, 0x007fffff, 0x7f7f7f7f,
        0x7f7f7f7f, 0xffffffff, 0x000000e0, 0x1f3efffe, 0xfffffffe, 0xffffffff,
        0xfe7fffff, 0xfffffffe, 0xffffffff, 0xf7ffffff, 0xffffffe0, 0xfffeffff,
        0xffffffff, 0xffffffff, 0x00007fff, 0xffffffff, 0x00000000, 0xffff0000,
        0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00001fff, 0x00000000,
        0xffff0000, 0x3fffffff, 0xffff1fff, 0x00000fff, 0xffffffff, 0xbff0ffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x0003ffff, 0xff800000, 0xfffffffc,
        0xffffffff, 0xffffffff, 0xfffff9ff, 0xffffffff, 0x03eb07ff, 0xfffc0000,
        0xffffffff, 0x000010ff, 0xffffffff, 0x000fffff, 0xffffffff, 0xffffffff,
        0x03ff003f, 0xe8ffffff, 0xffffffff, 0xffff3fff, 0x000fffff, 0x1fffffff,
        0xffffffff, 0xffffffff, 0x03ff8001, 0x7fffffff, 0xffffffff, 0x007fffff,
        0x03ff3fff, 0xfc7fffff, 0xffffffff, 0xffffffff, 0x38000007, 0x007cffff,
        0x007e7e7e, 0xffff7f7f, 0xf7ffffff, 0xffff03ff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x03ff37ff, 0xffffffff, 0xffff000f, 0xfffff87f, 0x0fffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff3fff, 0xffffffff, 0xffffffff,
        0x03ffffff, 0x00000000, 0xe0f8007f, 0x5f7ffdff, 0xffffffdb, 0xffffffff,
        0xffffffff, 0x0003ffff, 0xfff80000, 0xffffffff, 0xffffffff, 0x3fffffff,
        0xffff0000, 0xffffffff, 0xfffcffff, 0xffffffff, 0x000000ff, 0x0fff0000,
        0x0000ffff, 0x0018ffff, 0x0000e000, 0xffdf0000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x1fffffff, 0x03ff0000, 0x87fffffe, 0x07fffffe, 0xffffffc0,
        0xffffffff, 0x7fffffff, 0x1cfcfcfc, 0x00000000, 0xffffefff, 0xb7ffff7f,
        0x3fff3fff, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0x07ffffff,
        0x00000000, 0x00000000, 0xffffffff, 0x001fffff, 0x00000000, 0x00000000,
        0x00000000, 0x20000000, 0x1fffffff, 0xffffffff, 0x0001ffff, 0x00000001,
        0xffffffff, 0xffffe000, 0xffff07ff, 0x07ffffff, 0x3fffffff, 0xffffffff,
        0x003eff0f, 0x00000000, 0x3fffffff, 0xffff03ff, 0xff0fffff, 0x0fffffff,
        0xffffffff, 0xffff00ff, 0xffffffff, 0xf7ff000f, 0xffb7f7ff, 0x1bfbfffb,
        0x00000000, 0x00000000, 0xffffffff, 0x007fffff, 0x003fffff, 0x000000ff,
        0xffffffbf, 0x07fdffff, 0x00000000, 0x00000000, 0xfffffd3f, 0x91bfffff,
        0x003fffff, 0x007fffff, 0x7fffffff, 0x00000000, 0x00000000, 0x0037ffff,
        0x003fffff, 0x03ffffff, 0x00000000, 0x00000000, 0xffffffff, 0xc0ffffff,
        0x00000000, 0x00000000, 0xfeeff06f, 0x873fffff, 0x00000000, 0x1fffffff,
        0x1fffffff, 0x00000000, 0xfffffeff, 0x0000007f, 0xffffffff, 0x003fffff,
        0x003fffff, 0x0007ffff, 0x0003ffff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x000001ff, 0x00000000, 0xffffffff, 0x0007ffff,
        0xffffffff, 0x0007ffff, 0xffffffff, 0x03ff00ff, 0x00000000, 0x00000000,
        0xffffffff, 0x00031bff, 0x00000000, 0x00000000, 0x1fffffff, 0xffff0080,
        0x0001ffff, 0xffff0000, 0x0000003f, 0xffff0000, 0x0000001f, 0x007fffff,
        0xffffffff, 0xffffffff, 0x0000007f, 0x803fffc0, 0xffffffff, 0x07ffffff,
        0xffff0004, 0x03ff01ff, 0xffffffff, 0xffdfffff, 0xffff00f0, 0x004fffff,
        0xffffffff, 0xffffffff, 0x17ffde1f, 0x00000000, 0xfffbffff, 0x40ffffff,
        0x00000000, 0x00000000, 0xbfffbd7f, 0xffff01ff, 0xffffffff, 0x03ff07ff,
        0xfff99fef, 0xfbedfdff, 0xe081399f, 0x001f1fcf, 0xffffffff, 0xffffffff,
        0xc3ff07ff, 0x00000003, 0xffffffff, 0xffffffff, 0x03ff00bf, 0x00000000,
        0xffffffff, 0xff3fffff, 0x3f000001, 0x00000000, 0xffffffff, 0xffffffff,
        0x03ff0011, 0x00000000, 0xffffffff, 0x01ffffff, 0x000003ff, 0x00000000,
        0xe7ffffff, 0x03ff0fff, 0x0000007f, 0x00000000, 0xffffffff, 0x07ffffff,
        0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x800003ff,
        0xff6ff27f, 0xf9bfffff, 0x03ff000f, 0x00000000, 0x00000000, 0xfffffcff,
        0xfcffffff, 0x0000001b, 0xffffffff, 0x7fffffff, 0xffff0080, 0xffffffff,
        0x23ffffff, 0xffff0000, 0xffffffff, 0x01ffffff, 0xfffffdff, 0xff7fffff,
        0x03ff0001, 0xfffc0000, 0xfffcffff, 0x007ffeff, 0x00000000, 0x00000000,
        0xfffffb7f, 0xb47fffff, 0x03ff00ff, 0xfffffdbf, 0x01fb7fff, 0x000003ff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x007fffff,
        0x00000000, 0x00010000, 0x00000000, 0x00000000, 0x03ffffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0x00007fff,
        0xffffffff, 0xffffffff, 0x0000000f, 0x00000000, 0xffff0000, 0xffffffff,
        0xffffffff, 0x0001ffff, 0xffffffff, 0x00007fff, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x0000007f, 0x00000000, 0xffffffff, 0x01ffffff,
        0x7fffffff, 0xffff03ff, 0xffffffff, 0x7fffffff, 0xffff03ff, 0x001f3fff,
        0xffffffff, 0x007fffff, 0x03ff000f, 0xe0fffff8, 0x0000ffff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffff87ff, 0xffffffff, 0xffff80ff, 0x00000000,
        0x00000000, 0x0003001b, 0xffffffff, 0xffffffff, 0xffffffff, 0x00ffffff,
        0xffffffff, 0xffffffff, 0x003fffff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x6fef0000, 0xffffffff, 0x00000007, 0x00070000, 0xffff00f0,
        0xffffffff, 0xffffffff, 0xffffffff, 0x0fffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x1fff07ff, 0x63ff01ff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffff3fff, 0x0000007f, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xf807e3e0, 0x00000fe7, 0x00003c00, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x0000001c, 0x00000000, 0xffffffff, 0xffffffff,
        0xffdfffff, 0xffffffff, 0xdfffffff, 0xebffde64, 0xffffffef, 0xffffffff,
        0xdfdfe7bf, 0x7bffffff, 0xfffdfc5f, 0xffffffff, 0xffffffff, 0xffffff3f,
        0xf7fffffd, 0xf7ffffff, 0xffdfffff, 0xffdfffff, 0xffff7fff, 0xffff7fff,
        0xfffffdff, 0xfffffdff, 0xffffcff7, 0xffffffff, 0xffffffff, 0xf87fffff,
        0xffffffff, 0x00201fff, 0xf8000010, 0x0000fffe, 0x00000000, 0x00000000,
        0x7fffffff, 0x00000000, 0x00000000, 0x00000000, 0xf9ffff7f, 0x000007db,
        0x00000000, 0x00000000, 0xffffffff, 0x3fff1fff, 0x000043ff, 0x00000000,
        0xffff0000, 0x00007fff, 0xffffffff, 0x03ffffff, 0x00000000, 0x00000000,
        0x00000000, 0x7fff6f7f, 0xffffffff, 0xffffffff, 0x007f001f, 0x00000000,
        0xffffffff, 0xffffffff, 0x03ff0fff, 0x00000000, 0xffffffef, 0x0af7fe96,
        0xaa96ea84, 0x5ef7f796, 0x0ffffbff, 0x0ffffbee, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x03ff0000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00000000, 0xffffffff, 0x01ffffff, 0xffffffff, 0xffffffff,
        0x3fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffff0003,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000001,
        0x3fffffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0x000007ff, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0x0000ffff,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_XID_START: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0005, 0x0002, 0x0006, 0x0007, 0x0008,
        0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014,
        0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x0002, 0x0002,
        0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x0002, 0x0002, 0x0002, 0x0024, 0x0025, 0x0026, 0x0027,
        0x0028, 0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0002, 0x0032,
        0x0002, 0x0002, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0039, 0x003a, 0x003b, 0xffff, 0xffff, 0xffff, 0xffff,
        0x003c, 0x003d, 0x003e, 0x003f, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0032,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0040, 0x0002, 0x0002, 0x0041, 0x0042, 0x0043, 0x0044,
        0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004a, 0x004b, 0x004c, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x004d,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x004e, 0x004f, 0x0050, 0x0051,
        0x0052, 0x0002, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005a, 0x005b, 0xffff,
        0xffff, 0x005c, 0x005d, 0x005e, 0x0002, 0x005f, 0x0060, 0x0061, 0x0002, 0x0002, 0x0062, 0x0063,
        0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0x006e, 0xffff,
        0xffff, 0x006f, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0xffff,
        0x0079, 0x007a, 0xffff, 0x007b, 0x007c, 0x007d, 0x007e, 0xffff, 0x007f, 0x0080, 0x0081, 0x0082,
        0x0083, 0x0084, 0xffff, 0xffff, 0x0085, 0x0086, 0x0087, 0x0088, 0xffff, 0x0089, 0xffff, 0x008a,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x008b, 0x008c, 0x0002, 0x008d, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x008e, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x008f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0090, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0091, 0x0092, 0x0093, 0x0086, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0094, 0xffff, 0x0095, 0x0096, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0097, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0098, 0x0038, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0099,
        0x0002, 0x0002, 0x009a, 0x0002, 0x0002, 0x009b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x009c, 0x009d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x009e, 0x009f, 0x00a0, 0x0002, 0x0002, 0x00a1, 0x00a2, 0x00a3, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00a4, 0xffff,
        0xffff, 0xffff, 0x00a5, 0xffff, 0xffff, 0x00a6, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00a7, 0x0002, 0x00a8, 0x00a9, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x00aa, 0x00ab, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x00ac, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00ad, 0x0002,
        0x00ae, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00af, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b0, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00b1, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x00b2, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x07fffffe, 0x07fffffe, 0x00000000, 0x04200400,
        0xff7fffff, 0xff7fffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x0003ffc3, 0x0000501f, 0x00000000, 0x00000000,
        0x00000000, 0xb8df0000, 0xffffd740, 0xfffffffb, 0xffffffff, 0xffbfffff,
        0xfffffc03, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffff,
        0x027fffff, 0xffffffff, 0x000001ff, 0x00000000, 0xffff0000, 0x000787ff,
        0x00000000, 0xffffffff, 0x000007ff, 0xfffec000, 0xffffffff, 0xffffffff,
        0x002fffff, 0x9c00c060, 0xfffd0000, 0x0000ffff, 0xffffe000, 0xffffffff,
        0xffffffff, 0x0002003f, 0xfffffc00, 0x043007ff, 0x043fffff, 0x00000110,
        0x01ffffff, 0xffff07ff, 0x00007eff, 0xffffffff, 0x000003ff, 0x00000000,
        0xfffffff0, 0x23ffffff, 0xff010000, 0xfffe0003, 0xfff99fe1, 0x23c5fdff,
        0xb0004000, 0x10030003, 0xfff987e0, 0x036dfdff, 0x5e000000, 0x001c0000,
        0xfffbbfe0, 0x23edfdff, 0x00010000, 0x02000003, 0xfff99fe0, 0x23edfdff,
        0xb0000000, 0x00020003, 0xd63dc7e8, 0x03ffc718, 0x00010000, 0x00000000,
        0xfffddfe0, 0x23fffdff, 0x27000000, 0x00000003, 0xfffddfe1, 0x23effdff,
        0x60000000, 0x00060003, 0xfffddff0, 0x27ffffff, 0x80704000, 0xfc000003,
        0xfc7fffe0, 0x2ffbffff, 0x0000007f, 0x00000000, 0xfffffffe, 0x0005ffff,
        0x0000007f, 0x00000000, 0xfffff7d6, 0x2005ffaf, 0xf000005f, 0x00000000,
        0x00000001, 0x00000000, 0xfffffeff, 0x00001fff, 0x00001f00, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0x800007ff, 0x3c3f0000, 0xffe1c062,
        0x00004003, 0xffffffff, 0xffff20bf, 0xf7ffffff, 0xffffffff, 0xffffffff,
        0x3d7f3dff, 0xffffffff, 0xffff3dff, 0x7f3dffff, 0xff7fff3d, 0xffffffff,
        0xff3dffff, 0xffffffff, 0x07ffffff, 0x00000000, 0x0000ffff, 0xffffffff,
        0xffffffff, 0x3f3fffff, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff9fff, 0x07fffffe, 0xffffffff,
        0xffffffff, 0x01ffc7ff, 0x8003ffff, 0x0003ffff, 0x0003ffff, 0x0001dfff,
        0xffffffff, 0x000fffff, 0x10800000, 0x00000000, 0x00000000, 0xffffffff,
        0xffffffff, 0x01ffffff, 0xffffffff, 0xffff05ff, 0xffffffff, 0x003fffff,
        0x7fffffff, 0x00000000, 0xffff0000, 0x001f3fff, 0xffffffff, 0xffff0fff,
        0x000003ff, 0x00000000, 0x007fffff, 0xffffffff, 0x001fffff, 0x00000000,
        0x00000000, 0x00000080, 0x00000000, 0x00000000, 0xffffffe0, 0x000fffff,
        0x00001fe0, 0x00000000, 0xfffffff8, 0xfc00c001, 0xffffffff, 0x0000003f,
        0xffffffff, 0x0000000f, 0xfc00e000, 0x3fffffff, 0xffff01ff, 0xe7ffffff,
        0x00000000, 0x046fde00, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000,
        0x3f3fffff, 0xffffffff, 0xaaff3f3f, 0x3fffffff, 0xffffffff, 0x5fdfffff,
        0x0fcf1fdc, 0x1fdc1fff, 0x00000000, 0x00000000, 0x00000000, 0x80020000,
        0x1fff0000, 0x00000000, 0x00000000, 0x00000000, 0x3f2ffc84, 0xf3fffd50,
        0x000043e0, 0xffffffff, 0x000001ff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x000c781f, 0xffffffff, 0xffff20bf,
        0xffffffff, 0x000080ff, 0x007fffff, 0x7f7f7f7f, 0x7f7f7f7f, 0x00000000,
        0x000000e0, 0x1f3e03fe, 0xfffffffe, 0xffffffff, 0xe07fffff, 0xfffffffe,
        0xffffffff, 0xf7ffffff, 0xffffffe0, 0xfffeffff, 0xffffffff, 0xffffffff,
        0x00007fff, 0xffffffff, 0x00000000, 0xffff0000, 0x00001fff, 0x00000000,
        0xffff0000, 0x3fffffff, 0xffff1fff, 0x00000c00, 0xffffffff, 0x80007fff,
        0x3fffffff, 0xffffffff, 0xffffffff, 0x0000ffff, 0xff800000, 0xfffffffc,
        0xffffffff, 0xffffffff, 0xfffff9ff, 0xffffffff, 0x03eb07ff, 0xfffc0000,
        0xfffff7bb, 0x00000007, 0xffffffff, 0x000fffff, 0xfffffffc, 0x000fffff,
        0x00000000, 0x68fc0000, 0xfffffc00, 0xffff003f, 0x0000007f, 0x1fffffff,
        0xfffffff0, 0x0007ffff, 0x00008000, 0x7c00ffdf, 0xffffffff, 0x000001ff,
        0x00000ff7, 0xc47fffff, 0xffffffff, 0x3e62ffff, 0x38000005, 0x001c07ff,
        0x007e7e7e, 0xffff7f7f, 0xf7ffffff, 0xffff03ff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00000007, 0xffffffff, 0xffff000f, 0xfffff87f, 0x0fffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff3fff, 0xffffffff, 0xffffffff,
        0x03ffffff, 0x00000000, 0xa0f8007f, 0x5f7ffdff, 0xffffffdb, 0xffffffff,
        0xffffffff, 0x0003ffff, 0xfff80000, 0xffffffff, 0xffffffff, 0xffffffff,
        0x3fffffff, 0xfffffff0, 0xffffffff, 0x3fffffff, 0xffff0000, 0xffffffff,
        0xfffcffff, 0xffffffff, 0x000000ff, 0x03ff0000, 0x00000000, 0x00000000,
        0x00000000, 0xaa8a0000, 0xffffffff, 0xffffffff, 0xffffffff, 0x1fffffff,
        0x00000000, 0x07fffffe, 0x07fffffe, 0xffffffc0, 0x3fffffff, 0x7fffffff,
        0x1cfcfcfc, 0x00000000, 0xffffefff, 0xb7ffff7f, 0x3fff3fff, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x07ffffff, 0x00000000, 0x00000000,
        0xffffffff, 0x001fffff, 0x1fffffff, 0xffffffff, 0x0001ffff, 0x00000000,
        0xffffffff, 0xffffe000, 0xffff07ff, 0x003fffff, 0x3fffffff, 0xffffffff,
        0x003eff0f, 0x00000000, 0x3fffffff, 0xffff0000, 0xff0fffff, 0x0fffffff,
        0xffffffff, 0xffff00ff, 0xffffffff, 0xf7ff000f, 0xffb7f7ff, 0x1bfbfffb,
        0x00000000, 0x00000000, 0xffffffff, 0x007fffff, 0x003fffff, 0x000000ff,
        0xffffffbf, 0x07fdffff, 0x00000000, 0x00000000, 0xfffffd3f, 0x91bfffff,
        0x003fffff, 0x007fffff, 0x7fffffff, 0x00000000, 0x00000000, 0x0037ffff,
        0x003fffff, 0x03ffffff, 0x00000000, 0x00000000, 0xffffffff, 0xc0ffffff,
        0x00000000, 0x00000000, 0xfeef0001, 0x003fffff, 0x00000000, 0x1fffffff,
        0x1fffffff, 0x00000000, 0xfffffeff, 0x0000001f, 0xffffffff, 0x003fffff,
        0x003fffff, 0x0007ffff, 0x0003ffff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x000001ff, 0x00000000, 0xffffffff, 0x0007ffff,
        0xffffffff, 0x0007ffff, 0xffffffff, 0x0000000f, 0x00000000, 0x00000000,
        0xffffffff, 0x000303ff, 0x00000000, 0x00000000, 0x1fffffff, 0xffff0080,
        0x0000003f, 0xffff0000, 0x00000003, 0xffff0000, 0x0000001f, 0x007fffff,
        0xfffffff8, 0x00ffffff, 0x00000000, 0x00260000, 0xfffffff8, 0x0000ffff,
        0xffff0000, 0x000001ff, 0xfffffff8, 0x0000007f, 0xffff0090, 0x0047ffff,
        0xfffffff8, 0x0007ffff, 0x1400001e, 0x00000000, 0xfffbffff, 0x00000fff,
        0x00000000, 0x00000000, 0xbfffbd7f, 0xffff01ff, 0x7fffffff, 0x00000000,
        0xfff99fe0, 0x23edfdff, 0xe0010000, 0x00000003, 0xffffffff, 0x001fffff,
        0x80000780, 0x00000003, 0xffffffff, 0x0000ffff, 0x000000b0, 0x00000000,
        0xffffffff, 0x00007fff, 0x0f000000, 0x00000000, 0xffffffff, 0x0000ffff,
        0x00000010, 0x00000000, 0xffffffff, 0x010007ff, 0x00000000, 0x00000000,
        0x07ffffff, 0x00000000, 0x0000007f, 0x00000000, 0xffffffff, 0x00000fff,
        0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x80000000,
        0xff6ff27f, 0x8000ffff, 0x00000002, 0x00000000, 0x00000000, 0xfffffcff,
        0x0001ffff, 0x0000000a, 0xfffff801, 0x0407ffff, 0xf0010000, 0xffffffff,
        0x200003ff, 0xffff0000, 0xffffffff, 0x01ffffff, 0xfffffdff, 0x00007fff,
        0x00000001, 0xfffc0000, 0x0000ffff, 0x00000000, 0x00000000, 0x00000000,
        0xfffffb7f, 0x0001ffff, 0x00000040, 0xfffffdbf, 0x010003ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0007ffff,
        0x00000000, 0x00010000, 0x00000000, 0x00000000, 0x03ffffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0x00007fff,
        0xffffffff, 0xffffffff, 0x0000000f, 0x00000000, 0xffff0000, 0xffffffff,
        0xffffffff, 0x0001ffff, 0xffffffff, 0x00007fff, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x0000007f, 0x00000000, 0xffffffff, 0x01ffffff,
        0x7fffffff, 0xffff0000, 0xffffffff, 0x7fffffff, 0xffff0000, 0x00003fff,
        0xffffffff, 0x0000ffff, 0x0000000f, 0xe0fffff8, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x000107ff, 0x00000000,
        0xfff80000, 0x00000000, 0x00000000, 0x0000000b, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00ffffff, 0xffffffff, 0xffffffff, 0x003fffff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x6fef0000, 0xffffffff, 0x00000007,
        0x00070000, 0xffff00f0, 0xffffffff, 0xffffffff, 0xffffffff, 0x0fffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x1fff07ff, 0x03ff01ff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffdfffff, 0xffffffff,
        0xdfffffff, 0xebffde64, 0xffffffef, 0xffffffff, 0xdfdfe7bf, 0x7bffffff,
        0xfffdfc5f, 0xffffffff, 0xffffffff, 0xffffff3f, 0xf7fffffd, 0xf7ffffff,
        0xffdfffff, 0xffdfffff, 0xffff7fff, 0xffff7fff, 0xfffffdff, 0xfffffdff,
        0x00000ff7, 0x00000000, 0x7fffffff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0x3f801fff, 0x00004000, 0x00000000, 0xffff0000, 0x00003fff,
        0xffffffff, 0x00000fff, 0x00000000, 0x00000000, 0x00000000, 0x7fff6f7f,
        0xffffffff, 0xffffffff, 0x0000001f, 0x00000000, 0xffffffff, 0xffffffff,
        0x0000080f, 0x00000000, 0xffffffef, 0x0af7fe96, 0xaa96ea84, 0x5ef7f796,
        0x0ffffbff, 0x0ffffbee, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x00000000, 0xffffffff, 0x01ffffff, 0xffffffff, 0xffffffff,
        0x3fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffff0003,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000001,
        0x3fffffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0x000007ff, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_XID_CONTINUE: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0004, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0005, 0x0002, 0x0006, 0x0007, 0x0008,
        0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014,
        0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x001e, 0x0002, 0x0002,
        0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x0002, 0x0002, 0x0002, 0x0024, 0x0025, 0x0026, 0x0027,
        0x0028, 0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x002f, 0x0030, 0x0031, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0038, 0x0039, 0x003a, 0xffff, 0xffff, 0xffff, 0xffff,
        0x003b, 0x003c, 0x003d, 0x003e, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x003f,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0040, 0x0002, 0x0002, 0x0041, 0x0042, 0x0043, 0x0044,
        0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004a, 0x004b, 0x004c, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x004d,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x004e, 0x004f, 0x0050, 0x0051,
        0x0052, 0x0002, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005a, 0x005b, 0x005c,
        0xffff, 0x005d, 0x005e, 0x005f, 0x0002, 0x0060, 0x0061, 0x0062, 0x0002, 0x0002, 0x0063, 0x0064,
        0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0x006e, 0x006f, 0xffff,
        0xffff, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0xffff,
        0x007a, 0x007b, 0xffff, 0x007c, 0x007d, 0x007e, 0x007f, 0xffff, 0x0080, 0x0081, 0x0082, 0x0083,
        0x0084, 0x0085, 0xffff, 0xffff, 0x0086, 0x0087, 0x0088, 0x0089, 0xffff, 0x008a, 0xffff, 0x008b,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x008c, 0x008d, 0x0002, 0x008e, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x008f, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0090, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0091, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0092, 0x0093, 0x0094, 0x0095, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0096, 0xffff, 0x0097, 0x0098, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0099, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x009a, 0x0037, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x009b,
        0x0002, 0x0002, 0x009c, 0x0002, 0x0002, 0x009d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x009e, 0x009f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x00a0, 0xffff, 0xffff, 0xffff, 0x00a1, 0x00a2, 0x00a3, 0xffff, 0xffff, 0xffff,
        0x00a4, 0x00a5, 0x00a6, 0x0002, 0x0002, 0x00a7, 0x00a8, 0x00a9, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00aa, 0x00ab, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00ac, 0xffff,
        0x00ad, 0xffff, 0x00ae, 0xffff, 0xffff, 0x00af, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00b0, 0x0002, 0x00b1, 0x00b2, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x00b3, 0x00b4, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00b5, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x00b6, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b7, 0x0002,
        0x00b8, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00b9, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00ba, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00bb, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x00bc, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x00bd,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x03ff0000, 0x87fffffe, 0x07fffffe, 0x00000000, 0x04a00400,
        0xff7fffff, 0xff7fffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x0003ffc3, 0x0000501f, 0xffffffff, 0xffffffff,
        0xffffffff, 0xb8dfffff, 0xffffd7c0, 0xfffffffb, 0xffffffff, 0xffbfffff,
        0xfffffcfb, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffff,
        0x027fffff, 0xffffffff, 0xfffe01ff, 0xbfffffff, 0xffff00b6, 0x000787ff,
        0x07ff0000, 0xffffffff, 0xffffffff, 0xffffc3ff, 0xffffffff, 0xffffffff,
        0x9fefffff, 0x9ffffdff, 0xffff0000, 0xffffffff, 0xffffe7ff, 0xffffffff,
        0xffffffff, 0x0003ffff, 0xffffffff, 0x243fffff, 0xffffffff, 0x00003fff,
        0x0fffffff, 0xffff07ff, 0xff007eff, 0xffffffff, 0xffffffff, 0xfffffffb,
        0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffcf, 0xfff99fef, 0xf3c5fdff,
        0xb080799f, 0x5003ffcf, 0xfff987ee, 0xd36dfdff, 0x5e023987, 0x003fffc0,
        0xfffbbfee, 0xf3edfdff, 0x00013bbf, 0xfe00ffcf, 0xfff99fee, 0xf3edfdff,
        0xb0e0399f, 0x0002ffcf, 0xd63dc7ec, 0xc3ffc718, 0x00813dc7, 0x0000ffc0,
        0xfffddfff, 0xf3fffdff, 0x27603ddf, 0x0000ffcf, 0xfffddfef, 0xf3effdff,
        0x60603ddf, 0x0006ffcf, 0xfffddfff, 0xffffffff, 0x80f07ddf, 0xfc00ffcf,
        0xfc7fffee, 0x2ffbffff, 0xff5f847f, 0x000cffc0, 0xfffffffe, 0x07ffffff,
        0x03ff7fff, 0x00000000, 0xfffff7d6, 0x3fffffaf, 0xf3ff3f5f, 0x00000000,
        0x03000001, 0xc2a003ff, 0xfffffeff, 0xfffe1fff, 0xfeffffdf, 0x1fffffff,
        0x00000040, 0x00000000, 0xffffffff, 0xffffffff, 0xffff03ff, 0xffffffff,
        0x3fffffff, 0xffffffff, 0xffff20bf, 0xf7ffffff, 0xffffffff, 0xffffffff,
        0x3d7f3dff, 0xffffffff, 0xffff3dff, 0x7f3dffff, 0xff7fff3d, 0xffffffff,
        0xff3dffff, 0xffffffff, 0xe7ffffff, 0x0003fe00, 0x0000ffff, 0xffffffff,
        0xffffffff, 0x3f3fffff, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff9fff, 0x07fffffe, 0xffffffff,
        0xffffffff, 0x01ffc7ff, 0x803fffff, 0x001fffff, 0x000fffff, 0x000ddfff,
        0xffffffff, 0xffffffff, 0x308fffff, 0x000003ff, 0x03ffb800, 0xffffffff,
        0xffffffff, 0x01ffffff, 0xffffffff, 0xffff07ff, 0xffffffff, 0x003fffff,
        0x7fffffff, 0x0fff0fff, 0xffffffc0, 0x001f3fff, 0xffffffff, 0xffff0fff,
        0x07ff03ff, 0x00000000, 0x0fffffff, 0xffffffff, 0x7fffffff, 0x9fffffff,
        0x03ff03ff, 0xbfff0080, 0x00007fff, 0x00000000, 0xffffffff, 0xffffffff,
        0x03ff1fff, 0x000ff800, 0xffffffff, 0xffffffff, 0xffffffff, 0x000fffff,
        0xffffffff, 0x00ffffff, 0xffffe3ff, 0x3fffffff, 0xffff01ff, 0xe7ffffff,
        0xfff70000, 0x07ffffff, 0x3f3fffff, 0xffffffff, 0xaaff3f3f, 0x3fffffff,
        0xffffffff, 0x5fdfffff, 0x0fcf1fdc, 0x1fdc1fff, 0x00000000, 0x80000000,
        0x00100001, 0x80020000, 0x1fff0000, 0x00000000, 0x1fff0000, 0x0001ffe2,
        0x3f2ffc84, 0xf3fffd50, 0x000043e0, 0xffffffff, 0x000001ff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0x000ff81f,
        0xffffffff, 0xffff20bf, 0xffffffff, 0x800080ff, 0x007fffff, 0x7f7f7f7f,
        0x7f7f7f7f, 0xffffffff, 0x000000e0, 0x1f3efffe, 0xfffffffe, 0xffffffff,
        0xe67fffff, 0xfffffffe, 0xffffffff, 0xf7ffffff, 0xffffffe0, 0xfffeffff,
        0xffffffff, 0xffffffff, 0x00007fff, 0xffffffff, 0x00000000, 0xffff0000,
        0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00001fff, 0x00000000,
        0xffff0000, 0x3fffffff, 0xffff1fff, 0x00000fff, 0xffffffff, 0xbff0ffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x0003ffff, 0xff800000, 0xfffffffc,
        0xffffffff, 0xffffffff, 0xfffff9ff, 0xffffffff, 0x03eb07ff, 0xfffc0000,
        0xffffffff, 0x000010ff, 0xffffffff, 0x000fffff, 0xffffffff, 0xffffffff,
        0x03ff003f, 0xe8ffffff, 0xffffffff, 0xffff3fff, 0x000fffff, 0x1fffffff,
        0xffffffff, 0xffffffff, 0x03ff8001, 0x7fffffff, 0xffffffff, 0x007fffff,
        0x03ff3fff, 0xfc7fffff, 0xffffffff, 0xffffffff, 0x38000007, 0x007cffff,
        0x007e7e7e, 0xffff7f7f, 0xf7ffffff, 0xffff03ff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x03ff37ff, 0xffffffff, 0xffff000f, 0xfffff87f, 0x0fffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff3fff, 0xffffffff, 0xffffffff,
        0x03ffffff, 0x00000000, 0xe0f8007f, 0x5f7ffdff, 0xffffffdb, 0xffffffff,
        0xffffffff, 0x0003ffff, 0xfff80000, 0xffffffff, 0xffffffff, 0xffffffff,
        0x3fffffff, 0xfffffff0, 0xffffffff, 0x3fffffff, 0xffff0000, 0xffffffff,
        0xfffcffff, 0xffffffff, 0x000000ff, 0x03ff0000, 0x0000ffff, 0x0018ffff,
        0x0000e000, 0xaa8a0000, 0xffffffff, 0xffffffff, 0xffffffff, 0x1fffffff,
        0x03ff0000, 0x87fffffe, 0x07fffffe, 0xffffffc0, 0xffffffff, 0x7fffffff,
        0x1cfcfcfc, 0x00000000, 0xffffefff, 0xb7ffff7f, 0x3fff3fff, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x07ffffff, 0x00000000, 0x00000000,
        0xffffffff, 0x001fffff, 0x00000000, 0x00000000, 0x00000000, 0x20000000,
        0x1fffffff, 0xffffffff, 0x0001ffff, 0x00000001, 0xffffffff, 0xffffe000,
        0xffff07ff, 0x07ffffff, 0x3fffffff, 0xffffffff, 0x003eff0f, 0x00000000,
        0x3fffffff, 0xffff03ff, 0xff0fffff, 0x0fffffff, 0xffffffff, 0xffff00ff,
        0xffffffff, 0xf7ff000f, 0xffb7f7ff, 0x1bfbfffb, 0x00000000, 0x00000000,
        0xffffffff, 0x007fffff, 0x003fffff, 0x000000ff, 0xffffffbf, 0x07fdffff,
        0x00000000, 0x00000000, 0xfffffd3f, 0x91bfffff, 0x003fffff, 0x007fffff,
        0x7fffffff, 0x00000000, 0x00000000, 0x0037ffff, 0x003fffff, 0x03ffffff,
        0x00000000, 0x00000000, 0xffffffff, 0xc0ffffff, 0x00000000, 0x00000000,
        0xfeeff06f, 0x873fffff, 0x00000000, 0x1fffffff, 0x1fffffff, 0x00000000,
        0xfffffeff, 0x0000007f, 0xffffffff, 0x003fffff, 0x003fffff, 0x0007ffff,
        0x0003ffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0x000001ff, 0x00000000, 0xffffffff, 0x0007ffff, 0xffffffff, 0x0007ffff,
        0xffffffff, 0x03ff00ff, 0x00000000, 0x00000000, 0xffffffff, 0x00031bff,
        0x00000000, 0x00000000, 0x1fffffff, 0xffff0080, 0x0001ffff, 0xffff0000,
        0x0000003f, 0xffff0000, 0x0000001f, 0x007fffff, 0xffffffff, 0xffffffff,
        0x0000007f, 0x803fffc0, 0xffffffff, 0x07ffffff, 0xffff0004, 0x03ff01ff,
        0xffffffff, 0xffdfffff, 0xffff00f0, 0x004fffff, 0xffffffff, 0xffffffff,
        0x17ffde1f, 0x00000000, 0xfffbffff, 0x40ffffff, 0x00000000, 0x00000000,
        0xbfffbd7f, 0xffff01ff, 0xffffffff, 0x03ff07ff, 0xfff99fef, 0xfbedfdff,
        0xe081399f, 0x001f1fcf, 0xffffffff, 0xffffffff, 0xc3ff07ff, 0x00000003,
        0xffffffff, 0xffffffff, 0x03ff00bf, 0x00000000, 0xffffffff, 0xff3fffff,
        0x3f000001, 0x00000000, 0xffffffff, 0xffffffff, 0x03ff0011, 0x00000000,
        0xffffffff, 0x01ffffff, 0x000003ff, 0x00000000, 0xe7ffffff, 0x03ff0fff,
        0x0000007f, 0x00000000, 0xffffffff, 0x07ffffff, 0x00000000, 0x00000000,
        0x00000000, 0xffffffff, 0xffffffff, 0x800003ff, 0xff6ff27f, 0xf9bfffff,
        0x03ff000f, 0x00000000, 0x00000000, 0xfffffcff, 0xfcffffff, 0x0000001b,
        0xffffffff, 0x7fffffff, 0xffff0080, 0xffffffff, 0x23ffffff, 0xffff0000,
        0xffffffff, 0x01ffffff, 0xfffffdff, 0xff7fffff, 0x03ff0001, 0xfffc0000,
        0xfffcffff, 0x007ffeff, 0x00000000, 0x00000000, 0xfffffb7f, 0xb47fffff,
        0x03ff00ff, 0xfffffdbf, 0x01fb7fff, 0x000003ff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x007fffff, 0x00000000, 0x00010000,
        0x00000000, 0x00000000, 0x03ffffff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00007fff, 0xffffffff, 0xffffffff,
        0x0000000f, 0x00000000, 0xffff0000, 0xffffffff, 0xffffffff, 0x0001ffff,
        0xffffffff, 0x00007fff, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0x0000007f, 0x00000000, 0xffffffff, 0x01ffffff, 0x7fffffff, 0xffff03ff,
        0xffffffff, 0x7fffffff, 0xffff03ff, 0x001f3fff, 0xffffffff, 0x007fffff,
        0x03ff000f, 0xe0fffff8, 0x0000ffff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffff87ff, 0xffffffff, 0xffff80ff, 0x00000000, 0x00000000, 0x0003001b,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00ffffff, 0xffffffff, 0xffffffff,
        0x003fffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x6fef0000,
        0xffffffff, 0x00000007, 0x00070000, 0xffff00f0, 0xffffffff, 0xffffffff,
        0xffffffff, 0x0fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x1fff07ff,
        0x63ff01ff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffff3fff,
        0x0000007f, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xf807e3e0,
        0x00000fe7, 0x00003c00, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0000001c, 0x00000000, 0xffffffff, 0xffffffff, 0xffdfffff, 0xffffffff,
        0xdfffffff, 0xebffde64, 0xffffffef, 0xffffffff, 0xdfdfe7bf, 0x7bffffff,
        0xfffdfc5f, 0xffffffff, 0xffffffff, 0xffffff3f, 0xf7fffffd, 0xf7ffffff,
        0xffdfffff, 0xffdfffff, 0xffff7fff, 0xffff7fff, 0xfffffdff, 0xfffffdff,
        0xffffcff7, 0xffffffff, 0xffffffff, 0xf87fffff, 0xffffffff, 0x00201fff,
        0xf8000010, 0x0000fffe, 0x00000000, 0x00000000, 0x7fffffff, 0x00000000,
        0x00000000, 0x00000000, 0xf9ffff7f, 0x000007db, 0x00000000, 0x00000000,
        0xffffffff, 0x3fff1fff, 0x000043ff, 0x00000000, 0xffff0000, 0x00007fff,
        0xffffffff, 0x03ffffff, 0x00000000, 0x00000000, 0x00000000, 0x7fff6f7f,
        0xffffffff, 0xffffffff, 0x007f001f, 0x00000000, 0xffffffff, 0xffffffff,
        0x03ff0fff, 0x00000000, 0xffffffef, 0x0af7fe96, 0xaa96ea84, 0x5ef7f796,
        0x0ffffbff, 0x0ffffbee, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x03ff0000, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000000,
        0xffffffff, 0x01ffffff, 0xffffffff, 0xffffffff, 0x3fffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff0003, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00000001, 0x3fffffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x000007ff, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x0000ffff, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_PATTERN_SYNTAX: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0x0003, 0x0004, 0x0004, 0x0004, 0x0004,
        0x0005, 0xffff, 0x0004, 0x0004, 0x0004, 0x0004, 0x0006, 0x0007, 0x0004, 0x0004, 0x0004, 0x0004,
        0x0004, 0x0004, 0x0004, 0x0004, 0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0xffff, 0xffff, 0xffff,
        0x0008, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0x0009, 0xffff, 0x000a, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0xfc00fffe, 0x78000001, 0x78000001, 0x00000000, 0x88435afe,
        0x00800000, 0x00800000, 0xffff0000, 0x7fff00ff, 0x7feffffe, 0x00000000,
        0xffff0000, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x003fffff, 0xfff00000, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffff0e, 0x00010001, 0x00000000, 0x00000000,
        0x00000000, 0xc0000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000060, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_PATTERN_WHITE_SPACE: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00003e00, 0x00000001, 0x00000000, 0x00000000, 0x00000020, 0x00000000,
        0x00000000, 0x00000000, 0x0000c000, 0x00000300, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_GRAPHEME_BASE: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0002, 0x0002, 0x0002, 0x0003, 0x0004, 0x0002, 0x0005, 0x0006, 0x0007,
        0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013,
        0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0x0002, 0x0002,
        0x001e, 0x001f, 0x0020, 0x0021, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0022, 0x0023, 0x0024,
        0x0025, 0x0026, 0x0027, 0x0028, 0x0029, 0x002a, 0x002b, 0x002c, 0x002d, 0x002e, 0x0002, 0x002f,
        0x0002, 0x0002, 0x0030, 0x0031, 0x0032, 0x0033, 0x0002, 0x0034, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0035, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0036, 0x0037, 0x0002, 0x0038, 0x0039, 0x003a, 0x003b, 0x003c, 0x0002, 0x003d,
        0x003e, 0x003f, 0x0040, 0x0041, 0x0042, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0043, 0x0002, 0x0002, 0x0044, 0x0045, 0x0002, 0x0046,
        0x0047, 0x0048, 0x0049, 0x004a, 0x004b, 0x004c, 0x004d, 0x004e, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x004f,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0050, 0x0051, 0x0052, 0x0053,
        0x0002, 0x0002, 0x0002, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005a, 0x005b, 0x005c,
        0xffff, 0x005d, 0x005e, 0x005f, 0x0002, 0x0060, 0x0061, 0x0062, 0x0002, 0x0002, 0x0063, 0x0064,
        0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006a, 0x006b, 0x006c, 0x006d, 0x006e, 0x006f, 0xffff,
        0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007a, 0xffff,
        0x007b, 0x007c, 0xffff, 0x007d, 0x007e, 0x007f, 0x0080, 0xffff, 0x0081, 0x0082, 0x0083, 0x0084,
        0x0085, 0x0086, 0xffff, 0xffff, 0x0087, 0x0088, 0x0089, 0x008a, 0xffff, 0x008b, 0xffff, 0x008c,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x008d, 0x008e, 0x0002, 0x008f, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0090, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0091, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0092, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0093, 0x0094, 0x0095, 0x0096, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0097, 0x0098, 0x0099, 0x009a, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x009b, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x009c, 0x009d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x009e,
        0x0002, 0x0002, 0x009f, 0x0002, 0x0002, 0x00a0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00a1, 0x00a2, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x00a3, 0x008f, 0x0002, 0x00a4, 0x00a5, 0x00a6, 0x00a7, 0x00a8, 0x00a9, 0xffff,
        0x00aa, 0x00ab, 0x00ac, 0x0002, 0x0002, 0x00ad, 0x0002, 0x00ae, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00af, 0x00b0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x00b1, 0xffff,
        0xffff, 0xffff, 0x00b2, 0xffff, 0xffff, 0x00b3, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x00b4, 0x0002, 0x00b5, 0x00b6, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x00b7, 0x00b8, 0x00b9, 0xffff, 0x00ba, 0x00bb, 0xffff, 0xffff, 0x00bc, 0x00bd, 0x0002, 0x00be,
        0x00bf, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00c0, 0x00c1, 0x00c2,
        0x00c3, 0x00c4, 0x0002, 0x0002, 0x00c5, 0x00c6, 0x0002, 0x00c7, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x00c8, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00c9, 0x0002,
        0x00ca, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00cb, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x00cc, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0x0002, 0x0002, 0x0002,
        0x00cd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002, 0x0002,
        0x0002, 0x0002, 0x00ce, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0xffffffff, 0xffffffff, 0x7fffffff, 0x00000000, 0xffffdfff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0x00000000, 0x00000000, 0x00000000, 0xfcff0000, 0xffffd7f0, 0xfffffffb,
        0xffffffff, 0xffffffff, 0xfffffc07, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xfffeffff, 0xfe7fffff, 0xffffffff, 0x0000e7ff, 0x40000000,
        0xffff0049, 0x001f87ff, 0xe800ffc0, 0xffffffff, 0x000007ff, 0xfffeffff,
        0xffffffff, 0xffffffff, 0x403fffff, 0xffffc260, 0xfffd3fff, 0x0000ffff,
        0xffffe000, 0xffffffff, 0xffffffff, 0x0002003f, 0xffffffff, 0xc7f007ff,
        0x043fffff, 0x7fff0110, 0x41ffffff, 0xffff07ff, 0x00007fff, 0xffffffff,
        0x000003ff, 0x00000000, 0xfffffff8, 0xebffffff, 0xff01de01, 0xfffffff3,
        0xfff99fed, 0xa3c5fdff, 0xb0005981, 0x3fffffc3, 0xfff987e8, 0xc36dfdff,
        0x5e000001, 0x005cffc0, 0xfffbbfe8, 0xe3edfdff, 0x00011a01, 0x0203ffc3,
        0xfff99fec, 0x23edfdff, 0xb0001981, 0x00ffffc3, 0xd63dc7e8, 0x83ffc718,
        0x00011dc6, 0x07ffffc0, 0xfffddfee, 0x23fffdff, 0x2700001e, 0xff80ffc3,
        0xfffddffd, 0x63effdff, 0x60000d9b, 0x0006ffc3, 0xfffddffc, 0xa7ffffff,
        0xff70ddc1, 0xffffffc3, 0xfc7fffec, 0x2ffbffff, 0x7f03007f, 0x001cffc0,
        0xfffffffe, 0x800dffff, 0x0fff807f, 0x00000000, 0xfffff7d6, 0x200dffaf,
        0xf3ff005f, 0x00000000, 0xfcffffff, 0xfd5fffff, 0xfffffeff, 0x80001fff,
        0x00001f20, 0xc0000000, 0x07ffdfbf, 0x00000000, 0xffffffff, 0x99021fff,
        0x3cffffff, 0xffe1fffe, 0xdfffdf9b, 0xffffffff, 0xffff20bf, 0xffffffff,
        0xffffffff, 0xffffffff, 0x3d7f3dff, 0xffffffff, 0xffff3dff, 0x7f3dffff,
        0xff7fff3d, 0xffffffff, 0xff3dffff, 0xffffffff, 0x07ffffff, 0x1fffffff,
        0x03ffffff, 0xffffffff, 0xffffffff, 0x3f3fffff, 0x1fffffff, 0xffffffff,
        0xffffffff, 0x01ffffff, 0x8023ffff, 0x0073ffff, 0x0003ffff, 0x0001dfff,
        0xffffffff, 0xc04fffff, 0x1ff001bf, 0x03ff03ff, 0x03ff07ff, 0xffffffff,
        0xffffffff, 0x01ffffff, 0xffffff9f, 0xffff05ff, 0xffffffff, 0x003fffff,
        0x7fffffff, 0x01fb0e78, 0xfffffff1, 0x001f3fff, 0xffffffff, 0xffff0fff,
        0xc7ff03ff, 0xffffffff, 0xc67fffff, 0xffffffff, 0x00bfffff, 0x0007e01a,
        0x03ff03ff, 0x00003fff, 0x00000000, 0x00000000, 0xfffffff0, 0xe80fffff,
        0xffff1ffb, 0x7ff007ff, 0xfffffffc, 0xffffc4c3, 0xffffffff, 0xf00c5cbf,
        0xffffffff, 0xf8300fff, 0xffffe3ff, 0xffffffff, 0xffff01ff, 0xe7ffffff,
        0x000800ff, 0x04efde02, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000,
        0x3f3fffff, 0xffffffff, 0xaaff3f3f, 0x3fffffff, 0xffffffff, 0xffdfffff,
        0xefcfffdf, 0x7fdcffff, 0xffff07ff, 0xffff80ff, 0xffffffff, 0xfff30000,
        0x1fff7fff, 0xffffffff, 0x00000001, 0x00000000, 0xffff0fff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x0000007f, 0x000007ff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffcfffff, 0xffbfffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xfe0c7fff,
        0xffffffff, 0xffff20bf, 0xffffffff, 0x000180ff, 0x007fffff, 0x7f7f7f7f,
        0x7f7f7f7f, 0x00000000, 0xffffffff, 0xffffffff, 0x3fffffff, 0x00000000,
        0xfbffffff, 0xffffffff, 0xffffffff, 0x000fffff, 0xffffffff, 0xffffffff,
        0x003fffff, 0x0fff0000, 0xffffffff, 0xffff03ff, 0xfffffffe, 0xffffffff,
        0xf87fffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffe0, 0xfffeffff,
        0xffffffff, 0xffffffff, 0xffff7fff, 0xffffffff, 0xffffffff, 0xffff000f,
        0x7fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffff1fff, 0xffffffff,
        0xffff007f, 0xffffffff, 0xffffffff, 0x00000fff, 0xffffffff, 0xc0087fff,
        0x3fffffff, 0xffffffff, 0xffffffff, 0x00fcffff, 0xffffffff, 0xffffffff,
        0x03eb07ff, 0xfffc0000, 0xfffff7bb, 0x03ff0f9f, 0xffffffff, 0x00ffffff,
        0xffffffff, 0xffffffff, 0x03ffc00f, 0x7ffc0000, 0xffffffff, 0xffffc03f,
        0x800c007f, 0x1fffffff, 0xfffffff8, 0xcc37ffff, 0xc3ffbfff, 0x7fffffdf,
        0xffffffff, 0x001981ff, 0xf3ff2ff7, 0xefffffff, 0xffffffff, 0x3e62ffff,
        0xf8000005, 0x003fcfff, 0x007e7e7e, 0xffff7f7f, 0xffffffff, 0xffff0fff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x03ff1edf, 0xffffffff, 0xffff000f,
        0xfffff87f, 0x0fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffff3fff,
        0xffffffff, 0xffffffff, 0x03ffffff, 0x00000000, 0xa0f8007f, 0x5f7fffff,
        0xffffffdb, 0xffffffff, 0xffffffff, 0xffffffff, 0xfff80007, 0xffffffff,
        0xfffcffff, 0xffffffff, 0x000080ff, 0xffff0000, 0x03ff0000, 0xffff0000,
        0xfff7ffff, 0xffdf0f7f, 0xffffffff, 0xffffffff, 0xffffffff, 0x1fffffff,
        0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0x3fffffff, 0x7fffffff,
        0x1cfcfcfc, 0x30007f7f, 0xffffefff, 0xb7ffff7f, 0x3fff3fff, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0x07ffffff, 0xffffff87, 0xff8fffff,
        0xffffffff, 0xffffffff, 0x1fff7fff, 0x00000001, 0xffff0000, 0x1fffffff,
        0x1fffffff, 0xffffffff, 0x0001ffff, 0x0ffffffe, 0xffffffff, 0xffffe00f,
        0xffff07ff, 0x003fffff, 0xbfffffff, 0xffffffff, 0x003fff0f, 0x00000000,
        0x3fffffff, 0xffff03ff, 0xff0fffff, 0x0fffffff, 0xffffffff, 0xffff00ff,
        0xffffffff, 0xf7ff800f, 0xffb7f7ff, 0x1bfbfffb, 0x00000000, 0x00000000,
        0xffffffff, 0x007fffff, 0x003fffff, 0x000000ff, 0xffffffbf, 0x07fdffff,
        0x00000000, 0x00000000, 0xfffffd3f, 0x91bfffff, 0xffbfffff, 0xffffffff,
        0x7fffffff, 0x0000ff80, 0x00000000, 0xf837ffff, 0x8fffffff, 0x83ffffff,
        0x00000000, 0x00000000, 0xffffffff, 0xf0ffffff, 0xfffcffff, 0xffffffff,
        0xfeef0001, 0x003fffff, 0x01ff01ff, 0xffffffff, 0xffffffff, 0x00000000,
        0xffffffff, 0x007ff81f, 0xffffffff, 0xfe3fffff, 0xff3fffff, 0xff07ffff,
        0x1e03ffff, 0x0000fe00, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0x000001ff, 0x00000000, 0xffffffff, 0x0007ffff, 0xffffffff, 0xfc07ffff,
        0xffffffff, 0x03ff000f, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x7fffffff, 0xffffffff, 0x000323ff, 0x00000000, 0x00000000,
        0xffffffff, 0xffff00ff, 0x03fe003f, 0xffff0000, 0x000003c3, 0xffff0000,
        0x00000fff, 0x007fffff, 0xfffffffd, 0x00ffffff, 0xfffc3f80, 0x0026ffff,
        0xfffffffc, 0xd987ffff, 0xffff0003, 0x03ff01ff, 0xfffffff8, 0xffc0107f,
        0xffff00ff, 0x0077ffff, 0xfffffffc, 0x803fffff, 0xffff61ff, 0x001ffffe,
        0xfffbffff, 0x3f2c7fff, 0x00000000, 0x00000000, 0xbfffbd7f, 0xffff03ff,
        0x7fffffff, 0x03ff0007, 0xfff99fec, 0xa3edfdff, 0xe001399e, 0x0000000f,
        0xffffffff, 0x00ffffff, 0xafffffa3, 0x00000003, 0xffffffff, 0x5a06ffff,
        0x03ff00f2, 0x00000000, 0xffffffff, 0x4f037fff, 0x0ffffffe, 0x00000000,
        0xffffffff, 0x5807ffff, 0x03ff001e, 0x00001fff, 0xffffffff, 0x0340d7ff,
        0x000003ff, 0x00000000, 0x07ffffff, 0xffff0043, 0x0000007f, 0x00000000,
        0xffffffff, 0x09007fff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff,
        0xffffffff, 0x8007ffff, 0xff6ff27f, 0xa1beffff, 0x03ff0077, 0x00000000,
        0x00000000, 0xfffffcff, 0xf00fffff, 0x0000001e, 0xfffff801, 0x8607ffff,
        0xf181007f, 0xffffffff, 0xfc8003ff, 0xffff0007, 0xffffffff, 0x01ffffff,
        0xfffffdff, 0x4000ffff, 0xffff003f, 0xffff1fff, 0x0000ffff, 0x00120200,
        0x00000000, 0x00000000, 0xfffffb7f, 0x0001ffff, 0x03ff0040, 0xfffffdbf,
        0x01587fff, 0x000003ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x01e7ffff, 0x00000000, 0x00010000, 0xffffffff, 0x8003ffff,
        0x03ffffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffffffff, 0x001f7fff, 0xffffffff, 0xffffffff, 0x0000000f, 0x00000000,
        0xffff0000, 0xffffffff, 0xffffffff, 0x0007ffff, 0xffffffff, 0x00007fff,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x0000007f, 0x00000000,
        0xffffffff, 0x01ffffff, 0x7fffffff, 0xffffc3ff, 0xffffffff, 0x7fffffff,
        0xffff03ff, 0x00203fff, 0xffffffff, 0xff80ffff, 0xfbff003f, 0xe0fffffb,
        0x0000ffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x07ffffff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffff07ff, 0xffffffff, 0xfff800ff, 0x00000000,
        0x00000000, 0x0003000f, 0xffffffff, 0xffffffff, 0xffffffff, 0x00ffffff,
        0xffffffff, 0xffffffff, 0x003fffff, 0x00000000, 0x000001ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x6fef0000,
        0xffffffff, 0x00000007, 0x00070000, 0xffff00f0, 0xffffffff, 0xffffffff,
        0xffffffff, 0x0fffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x1fff07ff,
        0x93ff01ff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffff0000, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x003fffff,
        0xffffffff, 0xfffffe7f, 0xffffffff, 0x00003c5f, 0xfffff018, 0xffffc3ff,
        0xffffffff, 0x000007ff, 0xffffffff, 0xffffffff, 0x00000023, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x000fffff, 0xffffffff, 0xffffffff,
        0x007fffff, 0x01ffffff, 0xffffffff, 0xffffffff, 0xffdfffff, 0xffffffff,
        0xdfffffff, 0xebffde64, 0xffffffef, 0xffffffff, 0xdfdfe7bf, 0x7bffffff,
        0xfffdfc5f, 0xffffffff, 0xffffffff, 0xffffff3f, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffcfff, 0xffffffff, 0x00000000, 0x07800000,
        0x00000000, 0xffdfe000, 0x00000fef, 0x00000000, 0x00000000, 0x00000000,
        0x7fffffff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x3f801fff,
        0x0000c3ff, 0x00000000, 0xffff0000, 0x00003fff, 0xffffffff, 0x83ff0fff,
        0x00000000, 0x00000000, 0x00000000, 0x7fff6f7f, 0xffffffff, 0xffffffff,
        0x0000ff9f, 0x00000000, 0xffffffff, 0xffffffff, 0xc3ff080f, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xfffe0000, 0xffffffff, 0x001fffff,
        0x00000000, 0x00000000, 0xfffffffe, 0x3fffffff, 0x00000000, 0x00000000,
        0xffffffef, 0x0af7fe96, 0xaa96ea84, 0x5ef7f796, 0x0ffffbff, 0x0ffffbee,
        0x00000000, 0x00030000, 0xffffffff, 0xffff0fff, 0xffffffff, 0xffffffff,
        0x000fffff, 0xfffe7fff, 0xfffefffe, 0x003fffff, 0xffffffff, 0x00003fff,
        0x00000000, 0xffffffc0, 0xffff0007, 0x0fffffff, 0x000301ff, 0x0000003f,
        0xffffffff, 0xffffffff, 0xe0ffffff, 0x1fff1fff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x000fffff, 0xffffffff, 0xffffffff, 0x01ffffff, 0x00010fff,
        0xffff0fff, 0xffffffff, 0x03ff00ff, 0xffffffff, 0xffff00ff, 0x00033fff,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x000fffff, 0x1f1f3fff,
        0xffff007f, 0x07ff1fff, 0x03ff003f, 0x007f00ff, 0xfff7ffff, 0xffffffff,
        0x000007ff, 0x03ff0000, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000000,
        0xffffffff, 0x01ffffff, 0xffffffff, 0xffffffff, 0x3fffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffff0003, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x00000001, 0x3fffffff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x000007ff, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_GRAPHEME_EXTEND: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0002, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0xffff, 0xffff, 0x0001, 0xffff, 0x0002,
        0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e,
        0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0019, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001a, 0x001b,
        0x001c, 0x001d, 0x001e, 0xffff, 0x001f, 0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0xffff, 0x0025,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0026, 0x0027, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0028, 0x0029, 0x002a, 0xffff, 0xffff, 0xffff, 0xffff,
        0x002b, 0x002c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x002d, 0x002e, 0xffff, 0xffff,
        0x002f, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0xffff, 0x0035, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0036, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0037, 0xffff, 0xffff, 0x0038, 0xffff, 0xffff, 0xffff, 0x0039,
        0xffff, 0x003a, 0x003b, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x003c, 0x003d, 0xffff, 0xffff, 0xffff, 0xffff, 0x003e, 0xffff,
        0xffff, 0x003f, 0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0xffff,
        0x0049, 0x004a, 0xffff, 0x004b, 0x004c, 0x004d, 0x004e, 0xffff, 0x004f, 0xffff, 0x0050, 0x0051,
        0x0052, 0x0053, 0xffff, 0xffff, 0x0054, 0x0055, 0x0056, 0x0057, 0xffff, 0x0058, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0059, 0x005a, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x005b, 0x005c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0x005d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x005e, 0xffff, 0xffff, 0xffff, 0x005f, 0x0060, 0x0061, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0062, 0x0063, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0064, 0xffff, 0x005a, 0xffff, 0xffff, 0x0065, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0066, 0x0067, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0068, 0xffff, 0x0069, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0xffffffff, 0xffffffff, 0xffffffff, 0x0000ffff, 0x000003f8, 0x00000000,
        0x00000000, 0x00000000, 0xfffe0000, 0xbfffffff, 0x000000b6, 0x00000000,
        0x07ff0000, 0x00000000, 0xfffff800, 0x00010000, 0x00000000, 0x00000000,
        0x9fc00000, 0x00003d9f, 0x00020000, 0xffff0000, 0x000007ff, 0x00000000,
        0x00000000, 0x0001ffc0, 0x00000000, 0x200ff800, 0xfbc00000, 0x00003eef,
        0x0e000000, 0x00000000, 0xff000000, 0x00000000, 0xfffffc00, 0xfffffffb,
        0x00000007, 0x14000000, 0x00fe21fe, 0x0000000c, 0x00000002, 0x50000000,
        0x0080201e, 0x4000000c, 0x00000006, 0x10000000, 0x00023986, 0x00230000,
        0x00000006, 0x10000000, 0x000021be, 0xfc00000c, 0x00000002, 0xd0000000,
        0x00e0201e, 0x0000000c, 0x00000004, 0x40000000, 0x00802001, 0x00000000,
        0x00000011, 0xd0000000, 0x00603dc1, 0x0000000c, 0x00000002, 0x90000000,
        0x00603044, 0x0000000c, 0x00000003, 0x58000000, 0x0080201e, 0x0000000c,
        0x00000002, 0x00000000, 0x805c8400, 0x00000000, 0x00000000, 0x07f20000,
        0x00007f80, 0x00000000, 0x00000000, 0x1ff20000, 0x00003f00, 0x00000000,
        0x03000000, 0x02a00000, 0x00000000, 0x7ffe0000, 0xfeffe0df, 0x1fffffff,
        0x00000040, 0x00000000, 0x00000000, 0x66fde000, 0xc3000000, 0x001e0001,
        0x20002064, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xe0000000, 0x00000000, 0x001c0000, 0x000c0000, 0x000c0000, 0x000c0000,
        0x00000000, 0x3fb00000, 0x200ffe40, 0x00000000, 0x0000b800, 0x00000000,
        0x00000000, 0x00000000, 0x00000060, 0x00000200, 0x00000000, 0x00000000,
        0x00000000, 0x0e040187, 0x00000000, 0x00000000, 0x09800000, 0x00000000,
        0x7f400000, 0x9ff81fe5, 0x00000000, 0xffff0000, 0x00007fff, 0x00000000,
        0x0000000f, 0x17f00000, 0x00000004, 0x000ff800, 0x00000003, 0x00003b3c,
        0x00000000, 0x0003a340, 0x00000000, 0x00cff000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xfff70000, 0x031021fd, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0x00001000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0000, 0x0001ffff, 0x00000000, 0x00000000,
        0x00000000, 0x00038000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,
        0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x00000000, 0x0000fc00,
        0x00000000, 0x00000000, 0x06000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3ff78000, 0xc0000000, 0x00000000,
        0x00000000, 0x00030000, 0x00000844, 0x00001060, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000030, 0x8003ffff, 0x00000000, 0x00003fc0,
        0x0003ff80, 0x00000000, 0x00000007, 0x33c80000, 0x00000000, 0x00000020,
        0x00000000, 0x00667e00, 0x00001008, 0x10000000, 0x00000000, 0xc19d0000,
        0x00000002, 0x00403000, 0x00000000, 0x00000000, 0x00000000, 0x00002120,
        0x40000000, 0x00000000, 0x00000000, 0x00000000, 0x0000ffff, 0x0000ffff,
        0x00000000, 0x00000000, 0xc0000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x20000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x07c00000,
        0x0000f06e, 0x87000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000060, 0x00000000, 0x000000f0, 0x00000000, 0x00000000,
        0x00000000, 0x00001800, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0001ffc0, 0x00000000, 0x0000003c, 0x00000000, 0x00000000, 0x00000000,
        0x00000002, 0xff000000, 0x0000007f, 0x80190000, 0x00000003, 0x06780000,
        0x00000004, 0x00000000, 0x00000007, 0x001fef80, 0x00000000, 0x00080000,
        0x00000003, 0x7fc00000, 0x00009e00, 0x00000000, 0x00000000, 0x40d38000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000, 0x000007f8,
        0x00000003, 0x58000000, 0x00800001, 0x001f1fc0, 0x00000000, 0xff000000,
        0x4000005c, 0x00000000, 0x00000000, 0xa5f90000, 0x0000000d, 0x00000000,
        0x00000000, 0xb03c8000, 0x30000001, 0x00000000, 0x00000000, 0xa7f80000,
        0x00000001, 0x00000000, 0x00000000, 0x00bf2800, 0x00000000, 0x00000000,
        0xe0000000, 0x00000fbc, 0x00000000, 0x00000000, 0x00000000, 0x06ff8000,
        0x00000000, 0x00000000, 0x00000000, 0x58010000, 0x00000008, 0x00000000,
        0x00000000, 0x00000000, 0x0cf00000, 0x00000001, 0x000007fe, 0x79f80000,
        0x0e7e0080, 0x00000000, 0x037ffc00, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xbf7f0000, 0x00000000, 0x00000000, 0xfffc0000, 0x006dfcff,
        0x00000000, 0x00000000, 0x00000000, 0xb47e0000, 0x000000bf, 0x00000000,
        0x00a30000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00180000, 0x00000000, 0x00000000, 0x00000000, 0x001f0000,
        0x00000000, 0x007f0000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00008000, 0x00000000, 0x00078000, 0x00000000, 0x00000000, 0x00000010,
        0x60000000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffff3fff,
        0x0000007f, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xf807c3a0,
        0x00000fe7, 0x00003c00, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x0000001c, 0x00000000, 0xffffffff, 0xf87fffff, 0xffffffff, 0x00201fff,
        0xf8000010, 0x0000fffe, 0x00000000, 0x00000000, 0xf9ffff7f, 0x000007db,
        0x00000000, 0x00000000, 0x00000000, 0x00004000, 0x00000000, 0x0000f000,
        0x00000000, 0x00000000, 0x007f0000, 0x00000000, 0x00000000, 0x00000000,
        0x000007f0, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_LOGICAL_ORDER_EXCEPTION: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x0000001f, 0x00000000, 0x00000000, 0x04e00000,
        0x00000000, 0x00000000, 0x00000000, 0x1a600000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_DEPRECATED: Trie = Trie {
    level1: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0001, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0003,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0005, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0006, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000200, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00080000, 0x00000000, 0x00000000, 0x00000000, 0x02800000,
        0x00000000, 0x00000018, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x0000fc00, 0x00000000, 0x00000600, 0x00000000, 0x00000000,
        0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_PREPENDED_CONCATENATION_MARK: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0000, 0x0001, 0x0002, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0004, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x0000003f, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x20000000, 0x00000000, 0x00008000, 0x00000000, 0x00000000, 0x00000000,
        0x00030000, 0x00000000, 0x00000000, 0x00000004, 0x00000000, 0x20000000,
        0x00002000, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_REGIONAL_INDICATOR: Trie = Trie {
    level1: &[
        0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0xffffffc0, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_EMOJI: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0002, 0xffff, 0x0003, 0x0004, 0xffff, 0xffff, 0x0005, 0x0006,
        0xffff, 0x0007, 0xffff, 0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0xffff, 0xffff, 0x000d, 0xffff,
        0xffff, 0xffff, 0x000e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x000f, 0xffff, 0xffff, 0xffff, 0xffff, 0x0010, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0011, 0x0012, 0x0013, 0x0014,
        0x0015, 0xffff, 0x0016, 0x0017, 0x0018, 0x0019, 0x001a, 0x001b, 0x001c, 0x001d, 0xffff, 0x001e,
        0xffff, 0xffff, 0x001f, 0x0018, 0x0020, 0x0021, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x03ff0408, 0x00000000, 0x00000000, 0x00000000, 0x00004200,
        0x00000000, 0x00000000, 0x00000000, 0x10000000, 0x00000200, 0x00000000,
        0x00000000, 0x02000004, 0x00000000, 0x00000000, 0x03f00000, 0x00000600,
        0x00000000, 0x00000000, 0x0c000000, 0x00000100, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00008000, 0x070ffe00, 0x00000000, 0x00000000,
        0x00000004, 0x00000000, 0x00000000, 0x00400c00, 0x00000001, 0x78000000,
        0x2132401f, 0x0700c44d, 0x800fff05, 0xc8000169, 0x1afc0000, 0x60030c83,
        0x001ac130, 0x27bf0600, 0x2054bf24, 0x00180102, 0x00b85090, 0x00000018,
        0x00e00000, 0x80010002, 0x00000000, 0x00000000, 0x00000000, 0x00300000,
        0x00000000, 0x00000000, 0x180000e0, 0x00000000, 0x00210000, 0x00000000,
        0x00000000, 0x20010000, 0x00000000, 0x00000000, 0x02800000, 0x00000000,
        0x00000000, 0x00000000, 0x00000010, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00008000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xc0030000, 0x07fe4000, 0x00000000, 0x00000000, 0xffffffc0,
        0x04000006, 0x07fc8000, 0x00030000, 0x00000000, 0xffffffff, 0xfffffff3,
        0xffffffff, 0xffffffff, 0xcecfffff, 0xffffffff, 0xffffffff, 0xffb9ffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xbfffffff, 0xffffffff, 0x3fffffff, 0xffff7e00, 0x07f980ff,
        0x00613c80, 0x10060130, 0x700e001c, 0xfc08810a, 0xffffffff, 0xffffffff,
        0x0000ffff, 0x00000000, 0xffffffff, 0xffffffff, 0xe0e7f83f, 0x1ff91a3f,
        0x00000000, 0x00000000, 0x00000000, 0x00010fff, 0xfffff000, 0xf7ffffff,
        0xffffffbf, 0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x1f1f0000,
        0xffff007f, 0x07ff1fff, 0x03ff003f, 0x007f00ff, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_EMOJI_PRESENTATION: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0x0001,
        0xffff, 0xffff, 0xffff, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0007, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0008, 0x0009, 0xffff, 0x000a,
        0x000b, 0xffff, 0x000c, 0x000d, 0x000e, 0x000f, 0x0010, 0x0011, 0x0012, 0x0013, 0xffff, 0x0014,
        0xffff, 0xffff, 0x0015, 0x0016, 0x0017, 0x0018, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x0c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00091e00, 0x00000000, 0x00000000, 0x00000000, 0x60000000,
        0x00300000, 0x00000000, 0x000fff00, 0x80000000, 0x00080000, 0x60000c02,
        0x00104030, 0x242c0400, 0x00000c20, 0x00000100, 0x00b85000, 0x00000000,
        0x00e00000, 0x80010000, 0x00000000, 0x00000000, 0x18000000, 0x00000000,
        0x00210000, 0x00000000, 0x00000010, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00008000, 0x00000000, 0x07fe4000, 0x00000000,
        0x00000000, 0xffffffc0, 0x04000002, 0x077c8000, 0x00030000, 0x00000000,
        0xffffffff, 0xffbfe001, 0xffffffff, 0xdfffffff, 0x000fffff, 0xffffffff,
        0x000f87ff, 0xff11ffff, 0xffffffff, 0x7fffffff, 0xfffffffd, 0xffffffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x9fffffff, 0xffffffff, 0x3fffffff,
        0xffff7800, 0x040000ff, 0x00600000, 0x00000010, 0x00000000, 0xf8000000,
        0xffffffff, 0xffffffff, 0x0000ffff, 0x00000000, 0xffffffff, 0xffffffff,
        0xe0e7103f, 0x1ff01800, 0x00000000, 0x00000000, 0x00000000, 0x00010fff,
        0xfffff000, 0xf7ffffff, 0xffffffbf, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x1f1f0000,
        0xffff007f, 0x07ff1fff, 0x03ff003f, 0x007f00ff, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_EMOJI_MODIFIER: Trie = Trie {
    level1: &[
        0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0xf8000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_EMOJI_MODIFIER_BASE: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0000, 0x0001, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0xffff, 0xffff,
        0xffff, 0xffff, 0x000a, 0x000b, 0xffff, 0x000c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x02000000, 0x00003c00, 0x00000000, 0x00000000, 0x00000000,
        0x00000020, 0x00000000, 0x00001c9c, 0x00000000, 0x00000000, 0x00000000,
        0x0001ffcc, 0x11ffffc0, 0x000280ee, 0x00000400, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x04300000, 0x00610000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000f8e0, 0x00000000,
        0x00000000, 0x00700008, 0x00001001, 0x00000000, 0xff009000, 0x73ff0040,
        0x00000000, 0x00800000, 0x00000000, 0x0b600000, 0x3ffee000, 0x00000000,
        0x00000000, 0x00000000, 0x00000038, 0x007f0000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_EMOJI_COMPONENT: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0002, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0x0002, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0x0003, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0004,
        0xffff, 0xffff, 0xffff, 0x0005, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0006, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0007, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x03ff0408, 0x00000000, 0x00000000, 0x00002000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000008,
        0x00008000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xffffffc0, 0x00000000, 0x00000000, 0x00000000, 0xf8000000,
        0x00000000, 0x000f0000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff,
        0xffffffff, 0xffffffff, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_EXTENDED_PICTOGRAPHIC: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0xffff, 0x0000, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0001, 0xffff, 0x0002, 0x0003, 0xffff, 0xffff, 0x0004, 0x0005,
        0xffff, 0x0006, 0xffff, 0x0007, 0x0008, 0x0009, 0x000a, 0x000b, 0xffff, 0xffff, 0x000c, 0xffff,
        0xffff, 0xffff, 0x000d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x000e, 0xffff, 0xffff, 0xffff, 0xffff, 0x000f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0010, 0x0010, 0x0011, 0x0012,
        0x0013, 0x0010, 0x0010, 0x0014, 0x0010, 0x0010, 0x0015, 0x0010, 0x0016, 0x0010, 0x0017, 0x0018,
        0x0019, 0x001a, 0x001b, 0x0010, 0x0010, 0x0010, 0xffff, 0xffff, 0x0010, 0x0010, 0x0010, 0x0010,
        0x0010, 0x0010, 0x0010, 0x001c,
    ],
    level3: &[
        0x00000000, 0x00004200, 0x00000000, 0x00000000, 0x00000000, 0x10000000,
        0x00000200, 0x00000000, 0x00000000, 0x02000004, 0x00000000, 0x00000000,
        0x03f00000, 0x00000600, 0x00000000, 0x00000000, 0x0c000000, 0x00000100,
        0x00000000, 0x00000000, 0x00000100, 0x00000000, 0x00008000, 0x070ffe00,
        0x00000000, 0x00000000, 0x00000004, 0x00000000, 0x00000000, 0x00400c00,
        0x00000001, 0x78000000, 0xfff7ffbf, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffff003f, 0xffffffff, 0xffffffff, 0xffffffff, 0x2057ff3f, 0x00180102,
        0x00b85090, 0x000000f8, 0x00e00000, 0x80010002, 0x00000000, 0x00000000,
        0x00000000, 0x00300000, 0x00000000, 0x00000000, 0x180000e0, 0x00000000,
        0x00210000, 0x00000000, 0x00000000, 0x20010000, 0x00000000, 0x00000000,
        0x02800000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff,
        0xffffffff, 0xffffffff, 0x0000e000, 0x00008000, 0x00000000, 0xc003f000,
        0x07fe4000, 0xffffe000, 0xffffffff, 0x0000003f, 0x0400fffe, 0xf7fc8000,
        0xfffffe00, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x07ffffff,
        0xffffffff, 0x3fffffff, 0xffffffc0, 0xffffffff, 0xffffffff, 0xffffffff,
        0x0000ffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfff00000,
        0x00000000, 0x00000000, 0xffe00000, 0xffffffff, 0x0000f000, 0x00000000,
        0xfc00ff00, 0x00000000, 0x0000ff00, 0xffffc000, 0xffffffff, 0xffffffff,
        0xfffff000, 0xf7ffffff, 0xffffffbf, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff, 0x3fffffff, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_CHANGES_WHEN_LOWERCASED: Trie = Trie {
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
        0x00000000, 0x00000000, 0x07fffffe, 0x00000000, 0x00000000, 0x00000000,
        0x7f7fffff, 0x00000000, 0x55555555, 0xaa555555, 0x555554aa, 0x2b555555,
        0xb1dbced6, 0x11aed2d5, 0x4aaaadb0, 0x55d65555, 0x55555555, 0x6c055555,
        0x0000557a, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80450000,
        0xfffed740, 0x00000ffb, 0x55008000, 0xe6905555, 0xffffffff, 0x0000ffff,
        0x00000000, 0x55555555, 0x55555401, 0x55555555, 0x55552aab, 0x55555555,
        0x55555555, 0xfffe5555, 0x007fffff, 0x00000000, 0x00000000, 0xffffffff,
        0x000020bf, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0x003fffff,
        0xffff0000, 0xe7ffffff, 0x00000000, 0x00000000, 0x55555555, 0x55555555,
        0x55555555, 0x55555555, 0x40155555, 0x55555555, 0x55555555, 0x55555555,
        0x3f00ff00, 0xff00ff00, 0xaa003f00, 0x0000ff00, 0xff00ff00, 0x1f00ff00,
        0x0f001f00, 0x1f001f00, 0x00000000, 0x00040c40, 0x00000000, 0x0000ffff,
        0x00000008, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffc00000,
        0x0000ffff, 0x00000000, 0xffffffff, 0x0000ffff, 0x00000000, 0xc025ea9d,
        0x55555555, 0x55555555, 0x55555555, 0x00042805, 0x00000000, 0x00000000,
        0x55555555, 0x00001555, 0x05555555, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x55545554, 0x55555555, 0x6a005555, 0x55452855, 0x555f7d55,
        0x014102f5, 0x00200000, 0x00000000, 0x07fffffe, 0x00000000, 0x00000000,
        0xffffffff, 0x000000ff, 0x00000000, 0x00000000, 0x00000000, 0xffff0000,
        0x000fffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xf7ff0000,
        0x0037f7ff, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x0007ffff,
        0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0x00000000, 0xffffffff, 0x00000003,
        0x00000000, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_CHANGES_WHEN_UPPERCASED: Trie = Trie {
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0021, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0023, 0x0024, 0xffff, 0x0025, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0026, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0027, 0xffff, 0xffff,
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
        0x0028, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0029, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x00000000, 0x07fffffe, 0x00000000, 0x00200000,
        0x80000000, 0xff7fffff, 0xaaaaaaaa, 0x54aaaaaa, 0xaaaaab55, 0xd4aaaaaa,
        0x46241129, 0xa251212a, 0xb5555b60, 0xaa2daaaa, 0xaaaaaaaa, 0x900aaaa8,
        0x1adfaa85, 0x20269f6b, 0x60041f8d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000020, 0x388a0000, 0x00010000, 0xfffff000,
        0xaae37fff, 0x092faaaa, 0x00000000, 0xffff0000, 0xffffffff, 0xaaaaaaaa,
        0xaaaaa802, 0xaaaaaaaa, 0xaaaad554, 0xaaaaaaaa, 0xaaaaaaaa, 0x0000aaaa,
        0x00000000, 0xfffffffe, 0x000000ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xffff0000, 0xe7ffffff, 0x00000000, 0x00000000,
        0x00000000, 0x3f000000, 0x000001ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x22000000, 0x00004000, 0x00000000,
        0x00000000, 0x00000000, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa,
        0x0feaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0x003f00ff, 0x00ff00ff,
        0x00ff003f, 0x3fff00ff, 0xffffffff, 0x50dfffff, 0x00cf10dc, 0x10dc00ff,
        0x00000000, 0x00000000, 0x00004000, 0xffff0000, 0x00000010, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffff0000, 0x000003ff,
        0x00000000, 0xffff0000, 0xffffffff, 0x00481562, 0xaaaaaaaa, 0xaaaaaaaa,
        0xaaaaaaaa, 0x0008500a, 0xffffffff, 0x000020bf, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0xaaaaaaaa, 0x00002aaa, 0x0aaaaaaa, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xaaa8aaa8, 0xaaaaaaaa, 0x9400aaaa,
        0xaa9a10aa, 0xaaa002aa, 0x0282050a, 0x00400000, 0x00000000, 0x00000000,
        0x00080000, 0xffff0000, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000,
        0x00f8007f, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x07fffffe, 0x00000000, 0x00000000, 0xffffff00, 0x0000ffff, 0x00000000,
        0x00000000, 0x00000000, 0xff000000, 0x0fffffff, 0xff800000, 0x1bfbfffb,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x0007ffff,
        0x00000000, 0x00000000, 0xffffffff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xffffffff, 0x00000000, 0xfffffffc, 0x0000000f, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_CHANGES_WHEN_TITLECASED: Trie = Trie {
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0020, 0xffff,
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
        0x00000000, 0x00000000, 0x00000000, 0x07fffffe, 0x00000000, 0x00200000,
        0x80000000, 0xff7fffff, 0xaaaaaaaa, 0x54aaaaaa, 0xaaaaab55, 0xd4aaaaaa,
        0x46241129, 0xa251212a, 0xb55556d0, 0xaa2baaaa, 0xaaaaaaaa, 0x900aaaa8,
        0x1adfaa85, 0x20269f6b, 0x60041f8d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000020, 0x388a0000, 0x00010000, 0xfffff000,
        0xaae37fff, 0x092faaaa, 0x00000000, 0xffff0000, 0xffffffff, 0xaaaaaaaa,
        0xaaaaa802, 0xaaaaaaaa, 0xaaaad554, 0xaaaaaaaa, 0xaaaaaaaa, 0x0000aaaa,
        0x00000000, 0xfffffffe, 0x000000ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3f000000, 0x000001ff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x22000000,
        0x00004000, 0x00000000, 0x00000000, 0x00000000, 0xaaaaaaaa, 0xaaaaaaaa,
        0xaaaaaaaa, 0xaaaaaaaa, 0x0feaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa,
        0x003f00ff, 0x00ff00ff, 0x00ff003f, 0x3fff00ff, 0x00ff00ff, 0x40df00ff,
        0x00cf00dc, 0x00dc00ff, 0x00000000, 0x00000000, 0x00004000, 0xffff0000,
        0x00000010, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffff0000, 0x000003ff, 0x00000000, 0xffff0000, 0xffffffff, 0x00481562,
        0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0x0008500a, 0xffffffff, 0x000020bf,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xaaaaaaaa, 0x00002aaa,
        0x0aaaaaaa, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xaaa8aaa8,
        0xaaaaaaaa, 0x9400aaaa, 0xaa9a10aa, 0xaaa002aa, 0x0282050a, 0x00400000,
        0x00000000, 0x00000000, 0x00080000, 0xffff0000, 0xffffffff, 0xffffffff,
        0x00000000, 0x00000000, 0x00f8007f, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x07fffffe, 0x00000000, 0x00000000, 0xffffff00,
        0x0000ffff, 0x00000000, 0x00000000, 0x00000000, 0xff000000, 0x0fffffff,
        0xff800000, 0x1bfbfffb, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0x0007ffff, 0x00000000, 0x00000000, 0xffffffff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x00000000, 0xfffffffc,
        0x0000000f, 0x00000000, 0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_CHANGES_WHEN_CASEFOLDED: Trie = Trie {
    level1: &[
        0x0000, 0x0001, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level2: &[
        0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0xffff, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009, 0x000a,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000b, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x000c, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x000d, 0xffff, 0xffff,
        0x000e, 0x000f, 0x0010, 0x0011, 0xffff, 0xffff, 0x0012, 0x0013, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0014, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0015, 0x0016, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0017, 0x0018, 0x0019, 0x001a,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001b, 0x001c, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001d, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x001e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x001f, 0x0020, 0x0021, 0x0022, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0023, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0024, 0xffff, 0xffff,
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
        0x0025, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0026, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x07fffffe, 0x00000000, 0x00000000, 0x00200000,
        0xff7fffff, 0x00000000, 0x55555555, 0xaa555555, 0x555556aa, 0xab555555,
        0xb1dbced6, 0x11aed2d5, 0x4aaaadb0, 0x55d65555, 0x55555555, 0x6c055555,
        0x0000557a, 0x00000000, 0x00000000, 0x00000000, 0x00000020, 0x80450000,
        0xfffed740, 0x00000ffb, 0x55638004, 0xe6b35555, 0xffffffff, 0x0000ffff,
        0x00000000, 0x55555555, 0x55555401, 0x55555555, 0x55552aab, 0x55555555,
        0x55555555, 0xfffe5555, 0x007fffff, 0x00000000, 0x00000080, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x000020bf, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x3f000000, 0xffff01ff, 0xe7ffffff,
        0x00000000, 0x00000000, 0x55555555, 0x55555555, 0x55555555, 0x55555555,
        0x4c155555, 0x55555555, 0x55555555, 0x55555555, 0x3f00ff00, 0xff00ff00,
        0xaa003f00, 0x0000ff00, 0xffffffff, 0x1f9cffff, 0x0f001f9c, 0x1f9c1f00,
        0x00000000, 0x00040c40, 0x00000000, 0x0000ffff, 0x00000008, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xffc00000, 0x0000ffff, 0x00000000,
        0xffffffff, 0x0000ffff, 0x00000000, 0xc025ea9d, 0x55555555, 0x55555555,
        0x55555555, 0x00042805, 0x00000000, 0x00000000, 0x55555555, 0x00001555,
        0x05555555, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x55545554,
        0x55555555, 0x6a005555, 0x55452855, 0x555f7d55, 0x014102f5, 0x00200000,
        0x00000000, 0x00000000, 0x00000000, 0xffff0000, 0xffffffff, 0xffffffff,
        0x00000000, 0x00000000, 0x00f8007f, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x07fffffe, 0x00000000, 0x00000000, 0xffffffff, 0x000000ff,
        0x00000000, 0x00000000, 0x00000000, 0xffff0000, 0x000fffff, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0xf7ff0000, 0x0037f7ff, 0x00000000,
        0x00000000, 0x00000000, 0xffffffff, 0x0007ffff, 0x00000000, 0x00000000,
        0x00000000, 0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0x00000000, 0xffffffff, 0x00000003, 0x00000000, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

pub(crate) static PROP_CHANGES_WHEN_CASEMAPPED: Trie = Trie {
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
        0x0008, 0x0011, 0x0012, 0x0013, 0xffff, 0xffff, 0x0014, 0x0015, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0020, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0021, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0022, 0x0023, 0x0024, 0x0025, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0026, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0027, 0xffff, 0xffff,
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
        0x0028, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
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
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0029, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff,
    ],
    level3: &[
        0x00000000, 0x00000000, 0x07fffffe, 0x07fffffe, 0x00000000, 0x00200000,
        0xff7fffff, 0xff7fffff, 0xffffffff, 0xfeffffff, 0xffffffff, 0xffffffff,
        0xf7ffdfff, 0xb3fff3ff, 0xfffffff0, 0xffffffff, 0xffffffff, 0xfc0ffffd,
        0x1adfffff, 0x20269f6b, 0x60041f8d, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000020, 0xb8cf0000, 0xffffd740, 0xfffffffb,
        0xffe3ffff, 0xefbfffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xfffffc03, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xfffeffff,
        0x007fffff, 0xfffffffe, 0x000000ff, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0xffffffff, 0xffff20bf, 0xe7ffffff, 0x00000000, 0xffffffff,
        0xffffffff, 0x3f3fffff, 0xffff01ff, 0xe7ffffff, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x22000000, 0x00004000, 0x00000000,
        0x00000000, 0x00000000, 0x4fffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0x3f3fffff, 0xffffffff, 0xaaff3f3f, 0x3fffffff, 0xffffffff, 0x5fdfffff,
        0x0fcf1fdc, 0x1fdc1fff, 0x00000000, 0x00040c40, 0x00004000, 0xffffffff,
        0x00000018, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffc00000,
        0xffffffff, 0x000003ff, 0xffffffff, 0xffffffff, 0xffffffff, 0xc06dffff,
        0xffffffff, 0xffffffff, 0xffffffff, 0x000c780f, 0xffffffff, 0x000020bf,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xffffffff, 0x00003fff,
        0x0fffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfffcfffc,
        0xffffffff, 0xfe00ffff, 0xffdf38ff, 0xffff7fff, 0x03c307ff, 0x00600000,
        0x00000000, 0x00000000, 0x00080000, 0xffff0000, 0xffffffff, 0xffffffff,
        0x00000000, 0x00000000, 0x00f8007f, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x07fffffe, 0x07fffffe, 0x00000000, 0xffffffff, 0xffffffff,
        0x0000ffff, 0x00000000, 0x00000000, 0xffff0000, 0xff0fffff, 0x0fffffff,
        0x00000000, 0x00000000, 0x00000000, 0xf7ff0000, 0xffb7f7ff, 0x1bfbfffb,
        0x00000000, 0x00000000, 0xffffffff, 0x0007ffff, 0xffffffff, 0x0007ffff,
        0x00000000, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00000000,
        0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x0000000f, 0x00000000,
        0x00000000,
    ],
    bits: 1,
    default: 0,
};

