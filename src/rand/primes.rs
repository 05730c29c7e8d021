/// 64-bit primes used as state multipliers by [`super::Rand`].
pub const PRIMES: [u64; 32] = [
    0x87c3e62447ce5807, 0xaec746997017125f,
    0x9f1d1f01a9d9a519, 0xe46893867c089f61,
    0x86056a0acb0b79cf, 0x87cfffacf078f42d,
    0xc0df8eb985855a55, 0xf13a2d6e8e1ae98b,
    0xdb0af0c78dab8a77, 0x964dc0c2546e230b,
    0xfa451e772d22bfa9, 0xfa8c2e87ecdc932d,
    0xe598d69183535923, 0x903e33c18cc9c5c1,
    0xadac5231161dca5f, 0xaf6f4ce7b583d86f,
    0xc0b8106029e0de31, 0xe7849b9950a04fa1,
    0xc3774faa730ef0a1, 0xa2f412cb909429fb,
    0xd971395eb58fe061, 0xd3ade73a011c4c2b,
    0xad99c8c3fa1ed725, 0x83332693cc80b993,
    0x95949e4a8e1937c1, 0xdc4b98abc82468d5,
    0xe1b03f5e52c5c6dd, 0xd7aedcbe823b2bbf,
    0xe65b58e37ebc9ba9, 0xe111a8dcf862c5cb,
    0xaa04ba6ec48129fb, 0xcee04dcc3d99dce3,
];
