//! Curated lifestyle products sold through affiliate links: candles, books,
//! supplements and fashion.

use super::{LifestyleKind, LifestyleProduct};

pub(super) static LIFESTYLE: &[LifestyleProduct] = &[
    LifestyleProduct {
        id: "cnd-001",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Balsam & Cedar",
        maker: "Yankee Candle",
        description: "Fall scented candle, 22oz large jar with up to 150 hour burn time. Room-filling fragrance that brings the outdoors in with notes of balsam and cedar. #1 Best Seller in Jar Candles.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-candle-balsam-cedar.jpg",
        affiliate_url: Some("https://amzn.to/43yPmai"),
    },
    LifestyleProduct {
        id: "cnd-002",
        kind: LifestyleKind::Candle,
        name: "WoodWick Vanilla Bean Candle",
        maker: "WoodWick",
        description: "Holiday candle gifts for women and men, 9.7 oz medium hourglass candle with crackling wick. Creates a soothing ambiance with its distinctive crackling sound and rich vanilla fragrance.",
        price_cents: 1799,
        image: "/static/images/lifestyle/product-candle-vanilla-bean.jpg",
        affiliate_url: Some("https://amzn.to/43EdcRX"),
    },
    LifestyleProduct {
        id: "cnd-003",
        kind: LifestyleKind::Candle,
        name: "Vanilla Pumpkin Fall Candle",
        maker: "Auelife",
        description: "Scented candles for autumn, fall aromatherapy gifts - 7 oz. Amazon's Choice with sweet vanilla and warming pumpkin spice notes perfect for creating a cozy fall atmosphere.",
        price_cents: 1699,
        image: "/static/images/lifestyle/product-candle-vanilla-pumpkin.jpg",
        affiliate_url: Some("https://amzn.to/3X6xpfs"),
    },
    LifestyleProduct {
        id: "cnd-004",
        kind: LifestyleKind::Candle,
        name: "Christmas Candles Gift Set",
        maker: "Yinuo Candle",
        description: "4 pack scented soy candles with Cashmere Cedar, Fireside Glow, Cinnamon Apple & Vanilla Balsam. Long lasting holiday winter gifts for home. Amazon's Choice for festive seasonal fragrance collection.",
        price_cents: 2399,
        image: "/static/images/lifestyle/product-candle-christmas-set.jpg",
        affiliate_url: Some("https://amzn.to/47NTMwr"),
    },
    LifestyleProduct {
        id: "cnd-005",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Spiced Pumpkin, Fall Scented Candle, 22oz Large Jar with up to 150 Hour Burn Time",
        maker: "Yankee Candle",
        description: "Spiced Pumpkin is the essence of autumn. A smooth, comforting fragrance blends pumpkin with notes of cinnamon, nutmeg, and clove. A dash of mellow vanilla and baked aromas round out the base to create a warm, satisfying gourmand scent. 10K+ bought in past month.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-candle-yankee-spiced-pumpkin-1763492171.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0F3DRTCB2?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-006",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle, Balsam & Cedar Fall Scented Candle, 22oz Large Jar with up to 150 Hour Burn Time",
        maker: "Yankee Candle",
        description: "Balsam & Cedar is a timeless classic for a reason. Pine balsam scents mingle with brisk cedarwood, evoking a stroll through the forest, while nuanced base notes of warm amber offer a sense of comfort and calm. #1 Best Seller in Jar Candles. 30K+ bought in past month.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-candle-yankee-balsam-cedar-1763492326.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0F3DPXQP1?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-007",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Sparkling Cinnamon",
        maker: "Yankee Candle",
        description: "Twinkling lights and warm conversation. Spicy cinnamon and clove create a cozy wintertime classic. 22oz large jar with up to 150 hour burn time.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-candle-yankee-sparkling-cinnamon-1763493407.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0F3DRYY1N?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-008",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Ciderhouse",
        maker: "Yankee Candle",
        description: "Warm apple cider fragrance perfect for fall. 22oz large jar with up to 150 hour burn time.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-candle-yankee-ciderhouse-1763493736.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0F8KNKM36?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-009",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Harvest",
        maker: "Yankee Candle",
        description: "The essence of autumn harvest. 22oz large jar with up to 150 hour burn time.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-candle-yankee-harvest-1763493609.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0F3DPN1R4?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-010",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Apple Pumpkin",
        maker: "Yankee Candle",
        description: "Crisp apple and pumpkin blend for fall. 22oz large jar with up to 150 hour burn time.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-candle-yankee-apple-pumpkin-1763493836.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0F3DQHQ9K?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-011",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Autumn Leaves",
        maker: "Yankee Candle",
        description: "Crisp autumn leaves scent. 22oz large jar with up to 150 hour burn time.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-candle-yankee-autumn-leaves-1763493819.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0F3DQ4Z9J?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-012",
        kind: LifestyleKind::Candle,
        name: "WoodWick Pumpkin Nutmeg",
        maker: "WoodWick",
        description: "Pumpkin nutmeg with crackling wood wick. 10oz jar with wooden lid.",
        price_cents: 1599,
        image: "/static/images/lifestyle/product-candle-woodwick-pumpkin-nutmeg-1763493885.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B08846RTGF?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-013",
        kind: LifestyleKind::Candle,
        name: "A Cheerful Giver Orange Cinnamon Clove",
        maker: "A Cheerful Giver",
        description: "Orange, cinnamon and clove holiday scent. 34oz Papa jar with 155 hour burn time.",
        price_cents: 2800,
        image: "/static/images/lifestyle/product-candle-cheerful-orange-cinnamon-1763493936.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B005S4LKNO?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-014",
        kind: LifestyleKind::Candle,
        name: "Village Candle Spiced Pumpkin",
        maker: "Village Candle",
        description: "Classic spiced pumpkin scent. Large 21.25oz apothecary jar.",
        price_cents: 1799,
        image: "/static/images/lifestyle/product-candle-village-spiced-pumpkin-1763493969.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B002YX0GAA?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-015",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Autumn Lodge",
        maker: "Yankee Candle",
        description: "Warm lodge atmosphere with woody notes. Large jar candle.",
        price_cents: 3799,
        image: "/static/images/lifestyle/product-candle-yankee-autumn-lodge-1763494001.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B007N454XY?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-016",
        kind: LifestyleKind::Candle,
        name: "Village Candle Mulled Cider",
        maker: "Village Candle",
        description: "Warm mulled cider with holiday spices. Large 21.25oz apothecary jar.",
        price_cents: 2195,
        image: "/static/images/lifestyle/product-candle-village-mulled-cider-1763494031.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B001J6O6FE?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-017",
        kind: LifestyleKind::Candle,
        name: "Yankee Candle Harvest Classic",
        maker: "Yankee Candle",
        description: "Classic harvest scent for autumn. 22oz jar with over 110 hour burn time.",
        price_cents: 3430,
        image: "/static/images/lifestyle/product-candle-yankee-harvest-classic-1763494062.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B000W3RVA2?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "cnd-018",
        kind: LifestyleKind::Candle,
        name: "A Cheerful Giver Autumn Orchards",
        maker: "A Cheerful Giver",
        description: "Autumn orchard fragrance. 34oz Papa jar with 155 hour burn time.",
        price_cents: 2799,
        image: "/static/images/lifestyle/product-candle-cheerful-autumn-orchards-1763494093.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B009D4ZW0M?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "book-001",
        kind: LifestyleKind::Book,
        name: "The Art of Slow Living",
        maker: "Sophia Bennett",
        description: "Discover the beauty of slowing down and living with intention",
        price_cents: 2400,
        image: "/static/images/lifestyle/product-book.jpg",
        affiliate_url: Some("https://amzn.to/slowliving"),
    },
    LifestyleProduct {
        id: "book-002",
        kind: LifestyleKind::Book,
        name: "Morning Rituals",
        maker: "Emma Chen",
        description: "Transform your mornings into sacred moments of self-care",
        price_cents: 2200,
        image: "/static/images/lifestyle/product-book.jpg",
        affiliate_url: Some("https://amzn.to/morningrituals"),
    },
    LifestyleProduct {
        id: "book-003",
        kind: LifestyleKind::Book,
        name: "The Intentional Home",
        maker: "Luna Martinez",
        description: "Create a sanctuary that reflects your values and nourishes your soul",
        price_cents: 2800,
        image: "/static/images/lifestyle/product-book.jpg",
        affiliate_url: Some("https://amzn.to/intentionalhome"),
    },
    LifestyleProduct {
        id: "book-004",
        kind: LifestyleKind::Book,
        name: "Quiet Confidence",
        maker: "Aria Thompson",
        description: "Build inner strength through gentle practices and self-compassion",
        price_cents: 2100,
        image: "/static/images/lifestyle/product-book.jpg",
        affiliate_url: Some("https://amzn.to/quietconfidence"),
    },
    LifestyleProduct {
        id: "book-005",
        kind: LifestyleKind::Book,
        name: "Seasonal Living",
        maker: "Ivy Rose",
        description: "Align your life with nature's rhythms for deeper fulfillment",
        price_cents: 2600,
        image: "/static/images/lifestyle/product-book.jpg",
        affiliate_url: Some("https://amzn.to/seasonalliving"),
    },
    LifestyleProduct {
        id: "book-006",
        kind: LifestyleKind::Book,
        name: "The Minimalist Mind",
        maker: "Claire Adams",
        description: "Declutter your thoughts and embrace mental clarity",
        price_cents: 2300,
        image: "/static/images/lifestyle/product-book.jpg",
        affiliate_url: Some("https://amzn.to/minimalistmind"),
    },
    LifestyleProduct {
        id: "sup-001",
        kind: LifestyleKind::Supplement,
        name: "Vital Proteins Collagen Peptides",
        maker: "Skin & Hair",
        description: "Supports hair, nail, skin, bone & joint health. Unflavored collagen protein powder.",
        price_cents: 2052,
        image: "/static/images/lifestyle/product-supplement-vital-proteins-collagen-1763495213.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B09RQBHRCT?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-002",
        kind: LifestyleKind::Supplement,
        name: "Lavazza Super Crema Whole Bean Coffee",
        maker: "Energy & Focus",
        description: "Medium espresso roast coffee, Arabica and Robusta blend. #1 Best Seller in Roasted Coffee Beans. 80K+ bought in past month.",
        price_cents: 2141,
        image: "/static/images/lifestyle/product-coffee-lavazza-super-crema.jpg",
        affiliate_url: Some("https://amzn.to/49NCDo7"),
    },
    LifestyleProduct {
        id: "sup-003",
        kind: LifestyleKind::Supplement,
        name: "Doctor's Best Magnesium Glycinate",
        maker: "Sleep Support",
        description: "High absorption magnesium for sleep and muscle relaxation. 100% chelated.",
        price_cents: 1979,
        image: "/static/images/lifestyle/product-supplement-magnesium-glycinate-1763495348.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B000BD0RT0?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-004",
        kind: LifestyleKind::Supplement,
        name: "MegaFood Women's One Daily Multivitamin",
        maker: "Women's Health",
        description: "Multivitamin for women with Vitamin C, D, Iron & B vitamins. Bone and energy support.",
        price_cents: 2099,
        image: "/static/images/lifestyle/product-supplement-megafood-womens-multi-1763495431.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B000E9ZEL2?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-005",
        kind: LifestyleKind::Supplement,
        name: "OLLY Goodbye Stress Gummy",
        maker: "Mental Wellness",
        description: "Stress relief supplement with GABA, L-Theanine and lemon balm. Berry flavor.",
        price_cents: 1147,
        image: "/static/images/lifestyle/product-supplement-olly-stress-gummies-1763495510.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B01M1HYRNJ?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-006",
        kind: LifestyleKind::Supplement,
        name: "Nespresso Capsules Vertuo, Variety Pack",
        maker: "Energy & Focus",
        description: "Medium and dark roast coffee pods for Vertuo machines. Amazon's Choice. 100K+ bought in past month.",
        price_cents: 4570,
        image: "/static/images/lifestyle/product-coffee-nespresso-variety.jpg",
        affiliate_url: Some("https://amzn.to/4rbBeOe"),
    },
    LifestyleProduct {
        id: "sup-007",
        kind: LifestyleKind::Supplement,
        name: "Nature's Bounty Hair, Skin & Nails",
        maker: "Beauty",
        description: "Argan-infused vitamin supplement with biotin and hyaluronic acid.",
        price_cents: 1166,
        image: "/static/images/lifestyle/product-supplement-hair-skin-nails-1763495678.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0072F8D7S?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-008",
        kind: LifestyleKind::Supplement,
        name: "Garden of Life Primal Defense Ultra",
        maker: "Digestive Health",
        description: "Probiotics for digestive health balance. 15 billion CFU and 13 strains.",
        price_cents: 4094,
        image: "/static/images/lifestyle/product-supplement-garden-probiotic-1763495710.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B000GWG8FS?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-009",
        kind: LifestyleKind::Supplement,
        name: "NatureWise Vitamin D3",
        maker: "Immunity",
        description: "5000iu Vitamin D3 for immune support and bone health. Non-GMO, in organic olive oil.",
        price_cents: 1499,
        image: "/static/images/lifestyle/product-supplement-vitamin-d3-1763495743.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B00GB85JR4?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-010",
        kind: LifestyleKind::Supplement,
        name: "Solgar B-Complex 100",
        maker: "Energy & Vitality",
        description: "B-Complex vitamins for nervous system support and energy metabolism. Vegan and kosher.",
        price_cents: 3894,
        image: "/static/images/lifestyle/product-supplement-solgar-b-complex-1763495878.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B00014D33Q?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-011",
        kind: LifestyleKind::Supplement,
        name: "Nature Made Prenatal Multivitamin",
        maker: "Prenatal",
        description: "Prenatal vitamin with folic acid and minerals for daily nutritional support during pregnancy.",
        price_cents: 2699,
        image: "/static/images/lifestyle/product-supplement-nature-made-prenatal-1763495925.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B001F1G6SI?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-012",
        kind: LifestyleKind::Supplement,
        name: "RYZE Mushroom Coffee",
        maker: "Mental Wellness",
        description: "#1 Mushroom Coffee with 6 adaptogenic mushrooms and MCT oil. USDA Organic instant coffee for better energy, focus, digestion and immunity with Lion's Mane & Turkey Tail. 60K+ bought in past month.",
        price_cents: 4499,
        image: "/static/images/lifestyle/product-coffee-ryze-mushroom.jpg",
        affiliate_url: Some("https://amzn.to/3XF2gjn"),
    },
    LifestyleProduct {
        id: "sup-013",
        kind: LifestyleKind::Supplement,
        name: "Nature's Way Sambucus Elderberry Gummies",
        maker: "Immunity",
        description: "Immune support gummies with black elderberry extract, Vitamin C, D3 and zinc.",
        price_cents: 1238,
        image: "/static/images/lifestyle/product-supplement-elderberry-gummies-1763496014.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B00MJ7VL1O?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-014",
        kind: LifestyleKind::Supplement,
        name: "Nature's Bounty Biotin 10,000 mcg",
        maker: "Beauty",
        description: "Biotin vitamins for healthy hair, skin and nails. Rapid release softgels.",
        price_cents: 788,
        image: "/static/images/lifestyle/product-supplement-biotin-softgels-1763496073.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B009SZXM4E?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "sup-015",
        kind: LifestyleKind::Supplement,
        name: "Nespresso Capsules Vertuo, Barista Flavored Pack",
        maker: "Energy & Focus",
        description: "Medium roast coffee pods with barista flavors. Amazon's Choice. 60K+ bought in past month.",
        price_cents: 4200,
        image: "/static/images/lifestyle/product-coffee-nespresso-barista.jpg",
        affiliate_url: Some("https://amzn.to/483mCYn"),
    },
    LifestyleProduct {
        id: "fsh-014",
        kind: LifestyleKind::Fashion,
        name: "DREAM PAIRS Over The Knee Thigh High Boots",
        maker: "DREAM PAIRS",
        description: "Sleek over-the-knee boots with chunky heel for all-day comfort. Stretchy design creates a flattering silhouette while the block heel provides stability. Perfect statement piece for fall and winter outfits.",
        price_cents: 4027,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-014/lifestyle-1764869961961.png",
        affiliate_url: Some("https://www.amazon.com/dp/B071K971NT?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-002",
        kind: LifestyleKind::Fashion,
        name: "Cozy Cable Knit Cardigan",
        maker: "PRETTYGARDEN",
        description: "Embrace effortless comfort with this chunky cable knit cardigan. Featuring oversized sleeves and classic button closure, it's the perfect layering piece for crisp autumn days. Pair with your favorite jeans for relaxed weekend style.",
        price_cents: 2698,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-002/styled-1764870146743.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0B8D279W3?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-001",
        kind: LifestyleKind::Fashion,
        name: "Elegant Lace Sleeve Blouse",
        maker: "AUTOMET",
        description: "Sophisticated pleated detail meets delicate lace sleeves in this versatile top. Perfect for elevating your everyday wardrobe with a touch of feminine elegance.",
        price_cents: 999,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-001/styled-1764870244533.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0D4ZDZL1P?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-003",
        kind: LifestyleKind::Fashion,
        name: "Quilted Shoulder Bag",
        maker: "KKXIU",
        description: "Timeless elegance meets everyday functionality in this retro-inspired quilted bag. The soft clutch underarm design with gold hardware accents makes it perfect for both casual outings and refined occasions. A versatile piece that elevates any outfit.",
        price_cents: 2299,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-003/styled-1764870323888.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0FPC6W3G4?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-004",
        kind: LifestyleKind::Fashion,
        name: "Classic Satin Silk Pajama Set",
        maker: "Ekouaer",
        description: "Indulge in luxurious comfort with this classic button-down silk pajama set. The smooth satin finish feels incredible against your skin while the timeless design with contrast piping adds sophisticated style to your evening routine. Perfect for unwinding by the fire or enjoying a peaceful night's rest.",
        price_cents: 3144,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-004/styled-1764866641768.png",
        affiliate_url: Some("https://www.amazon.com/dp/B097GL24NJ?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-005",
        kind: LifestyleKind::Fashion,
        name: "Dainty Cross Necklace",
        maker: "PAVOI",
        description: "Elevate your everyday style with this delicate gold plated cross necklace. Featuring sparkling cubic zirconia crystals on a dainty chain, it adds a touch of refined elegance to any outfit. Perfect for layering or wearing alone, this versatile piece transitions seamlessly from day to night.",
        price_cents: 1395,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-005/lifestyle-1764870352138.png",
        affiliate_url: Some("https://www.amazon.com/dp/B07QTJ1WWL?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-006",
        kind: LifestyleKind::Fashion,
        name: "Stretch Pull-On Skinny Jeans",
        maker: "Jvini",
        description: "Effortlessly stylish distressed denim jeggings that combine comfort with edge. Features a stretchy pull-on waistband for all-day ease and trendy ripped details for that perfectly lived-in look. Available in regular and plus sizes to flatter every figure.",
        price_cents: 1758,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-006/lifestyle-1764870441589.png",
        affiliate_url: Some("https://www.amazon.com/dp/B079LVFJGD?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-007",
        kind: LifestyleKind::Fashion,
        name: "Vansha High Waisted Linen Palazzo Pants",
        maker: "Vansha",
        description: "Summer high waisted cotton linen palazzo pants. Wide leg lounge trousers with convenient pockets. Breathable fabric perfect for warm weather comfort and effortless boho style.",
        price_cents: 1999,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-007/styled-1764870602479.png",
        affiliate_url: Some("https://www.amazon.com/dp/B09YVFLNVP?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-008",
        kind: LifestyleKind::Fashion,
        name: "PRETTYGARDEN Chunky Knit Cardigan",
        maker: "PRETTYGARDEN",
        description: "Open front cardigan sweater with button down detail. Chunky cable knit design for cozy fall fashion. Oversized fit perfect for layering over your favorite outfits.",
        price_cents: 3229,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-008/lifestyle-1764870637432.png",
        affiliate_url: Some("https://www.amazon.com/dp/B08DTDPVBL?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-009",
        kind: LifestyleKind::Fashion,
        name: "AFKOMST Saddle Crossbody Bag",
        maker: "AFKOMST",
        description: "Small saddle purse with boho charm. Made from high-quality vegan leather. Features a classic flap design and adjustable strap. Perfect for everyday essentials.",
        price_cents: 1899,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-009/lifestyle-1764870754058.png",
        affiliate_url: Some("https://www.amazon.com/dp/B07BHC4Q2S?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-010",
        kind: LifestyleKind::Fashion,
        name: "IVARYSS Satin Sleep Scrunchies (12 Pack)",
        maker: "IVARYSS",
        description: "Premium satin scrunchies softer than silk. Gentle on hair to prevent breakage and frizz. 12-pack of neutral colors perfect for any outfit or sleepwear.",
        price_cents: 699,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-010/styled-1764870908457.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0CHV6QSDQ?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-011",
        kind: LifestyleKind::Fashion,
        name: "Gossifan Wide Brim Fedora Hat",
        maker: "Gossifan",
        description: "Classic wide brim felt panama hat with belt buckle accent. Gradient color design adds a modern touch to a timeless style. Adjustable fit for all-day comfort.",
        price_cents: 2479,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-011/lifestyle-1764870939275.png",
        affiliate_url: Some("https://www.amazon.com/dp/B09QRWVFZ3?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-012",
        kind: LifestyleKind::Fashion,
        name: "SOJOS Retro Oval Polarized Sunglasses",
        maker: "SOJOS",
        description: "Chic 90s retro oval sunglasses with gold metal frame. Polarized lenses provide UV400 protection. Lightweight and durable for everyday style.",
        price_cents: 899,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-012/lifestyle-1764871026020.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0FBWGSQMM?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-013",
        kind: LifestyleKind::Fashion,
        name: "DREAM PAIRS Women's Knee High Boots",
        maker: "DREAM PAIRS",
        description: "Classic knee-high pull-on boots perfect for fall and winter. Features a comfortable fit, versatile design, and quality construction. Ideal for pairing with jeans, dresses, or skirts for effortless seasonal style.",
        price_cents: 4499,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-013/lifestyle-1764871130621.png",
        affiliate_url: Some("https://www.amazon.com/dp/B01G990RDK?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-015",
        kind: LifestyleKind::Fashion,
        name: "XZQTIVE 3 Pack Women Belts for Jeans",
        maker: "XZQTIVE",
        description: "Versatile 3-pack leather waist belts with elegant gold buckles. Perfect for jeans, dresses, and pants. Classic design works for casual or professional settings. Essential wardrobe staple in three coordinating colors.",
        price_cents: 2489,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-015/lifestyle-1764871218819.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0CLJFZRH2?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-016",
        kind: LifestyleKind::Fashion,
        name: "High Waisted Ripped Skinny Jeans",
        maker: "LOVER BRAND FASHION",
        description: "High-waisted stretch skinny jeans with trendy destroyed ripped distressed detailing. Features a comfortable stretch fit that hugs your curves while the high-rise design flatters and elongates. Perfect for creating edgy casual looks with a modern edge.",
        price_cents: 2499,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-016/lifestyle-1764871325022.png",
        affiliate_url: Some("https://www.amazon.com/dp/B07B6TT6F3?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-017",
        kind: LifestyleKind::Fashion,
        name: "High Waist Stretchy Jeggings",
        maker: "IUGA",
        description: "Ultra-comfortable stretchy jeggings with tummy control and a flattering high waist design. The perfect blend of leggings comfort and jeans styling with functional pockets. Ideal for casual wear that's both comfortable and polished.",
        price_cents: 1999,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-017/lifestyle-1764871436184.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0CJBHLF3J?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-018",
        kind: LifestyleKind::Fashion,
        name: "High Waist Yoga Pants",
        maker: "OQQ",
        description: "Soft stretch casual straight leg yoga bottoms designed for all-day comfort. Features a high waist for support and flattering fit. Perfect for yoga, lounging, or casual outings with their versatile straight leg design.",
        price_cents: 2639,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-018/lifestyle-1764871627777.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0FDKW1SDT?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-019",
        kind: LifestyleKind::Fashion,
        name: "Plaid Shacket Jacket",
        maker: "Beaully",
        description: "Cozy 2025 fall fashion meets classic style with this plaid flannel shacket. Features a button-down front, long sleeves, and relaxed fit perfect for layering. The timeless brushed flannel fabric adds warmth and sophistication to any casual outfit.",
        price_cents: 2361,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-019/lifestyle-1764871715325.png",
        affiliate_url: Some("https://www.amazon.com/dp/B09NRJ8F5R?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-020",
        kind: LifestyleKind::Fashion,
        name: "Oversized Batwing Sweater",
        maker: "LILLUSORY",
        description: "Trendy oversized crewneck knit pullover with distinctive side slit design and batwing sleeves. This OEKO-TEX certified fashion-forward sweater offers cozy comfort with an elevated asymmetric hemline. Perfect for creating effortless 2025 fall outfits.",
        price_cents: 2659,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-020/lifestyle-1764871816522.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0BFL5MKKC?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-021",
        kind: LifestyleKind::Fashion,
        name: "Faux Fur Pom Beanie Hat",
        maker: "FURTALK",
        description: "Cozy winter warmth meets timeless style with this OEKO-TEX certified knitted beanie featuring a luxurious faux fur pom. The warm knit skull cap design with fleece lining provides comfortable coverage while the statement fur pom adds a playful touch. Perfect for cold weather fashion.",
        price_cents: 1234,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-021/styled-1764871977376.png",
        affiliate_url: Some("https://www.amazon.com/dp/B074TFDM7K?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-022",
        kind: LifestyleKind::Fashion,
        name: "Winter Accessories Gift Set",
        maker: "APEVAN",
        description: "Complete winter warmth essentials in one beautiful 4-in-1 set. Includes a fleece-lined beanie, long scarf, touchscreen gloves, and ear warmers. Coordinated design with premium fleece lining for extra warmth and comfort. Makes a perfect gift or treat yourself bundle.",
        price_cents: 3499,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-022/lifestyle-1764872009562.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0FHNVC3XF?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-023",
        kind: LifestyleKind::Fashion,
        name: "Waterproof Puffer Coat",
        maker: "MOERDENG",
        description: "Stay warm and dry all winter with this thickened fleece-lined waterproof puffer coat. Features a detachable faux fur hood, down jacket insulation, and multiple pockets. The waterproof parka design provides protection from elements without bulk.",
        price_cents: 5599,
        image: "https://tfximqohiizipawvzkms.supabase.co/storage/v1/object/public/product-images/fashion/fsh-023/styled-1764872189408.png",
        affiliate_url: Some("https://www.amazon.com/dp/B0CDBSGTTH?tag=lunarituals10-20"),
    },
    LifestyleProduct {
        id: "fsh-024",
        kind: LifestyleKind::Fashion,
        name: "Gold Hoop Earrings Set",
        maker: "LOLIAS",
        description: "Delicate 14K gold plated small chunky hoop earrings perfect for everyday wear. Hypoallergenic and nickel-free for sensitive ears with 95% recycled materials (RCS100 certified). Lightweight huggie hoops comfortable for all-day wear. Set of 3 pairs in varying sizes for versatile styling and multiple piercings.",
        price_cents: 854,
        image: "/static/images/lifestyle/product-hoop-earrings.jpg",
        affiliate_url: Some("https://www.amazon.com/dp/B0DM7H9QWV?tag=lunarituals10-20"),
    },
];
